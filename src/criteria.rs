//! Filter criteria
//!
//! [`RawFilterCriteria`] is the flat form the UI sends: every field optional,
//! every value a string (or a number), blank meaning "no constraint".
//! [`FilterCriteria`] is the typed form the engine works with. The conversion
//! between the two is the only place where blank strings are turned into
//! `None` and closed-set values are parsed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::filter::normalize::norm;
use crate::models::serde::{deserialize_text, parse_u32};
use crate::models::types::{DawatDuration, DawatStatus, EducationLevel, Gender, YesNo};

/// A closed-set criterion value as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    /// A recognized value
    Is(T),
    /// A value outside the known set; never matches anything
    Unrecognized(String),
}

impl<T> Selection<T> {
    fn parse_with(raw: &str, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        parse(raw).map_or_else(|| Self::Unrecognized(norm(raw)), Self::Is)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Is(value) => fmt::Display::fmt(value, f),
            Self::Unrecognized(raw) => write!(f, "{raw}?"),
        }
    }
}

/// An exact count criterion
///
/// Unparsable input is kept as `Invalid` so the filter stays active and is
/// never satisfied, rather than silently disappearing. Stored counts are
/// whole numbers, so fractional or negative input can never match either.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumberInput {
    /// A valid non-negative whole number
    Value(u32),
    /// Input that is not a non-negative whole number
    Invalid(String),
}

impl NumberInput {
    /// Parse caller input
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        parse_u32(raw).map_or_else(|| Self::Invalid(raw.trim().to_string()), Self::Value)
    }
}

impl fmt::Display for NumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Invalid(raw) => write!(f, "{raw}?"),
        }
    }
}

/// An inclusive age bound
///
/// Bounds are real numbers compared against whole-year ages, so "17.5"
/// admits 18 but not 17, and a negative bound admits every known age. Only
/// text that does not parse as a number is `Invalid`.
#[derive(Debug, Clone)]
pub enum AgeBound {
    /// A numeric bound
    Value(f64),
    /// Input that is not a number
    Invalid(String),
}

impl AgeBound {
    /// Parse caller input
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            // `+ 0.0` folds -0 into 0 so equal bounds compare equal bitwise
            Ok(value) if !value.is_nan() => Self::Value(value + 0.0),
            _ => Self::Invalid(trimmed.to_string()),
        }
    }

    /// The parsed bound, if numeric
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Invalid(_) => None,
        }
    }
}

impl From<u32> for AgeBound {
    fn from(value: u32) -> Self {
        Self::Value(f64::from(value))
    }
}

impl PartialEq for AgeBound {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a.to_bits() == b.to_bits(),
            (Self::Invalid(a), Self::Invalid(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for AgeBound {}

impl Hash for AgeBound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Value(v) => {
                state.write_u8(0);
                v.to_bits().hash(state);
            }
            Self::Invalid(raw) => {
                state.write_u8(1);
                raw.hash(state);
            }
        }
    }
}

impl fmt::Display for AgeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Invalid(raw) => write!(f, "{raw}?"),
        }
    }
}

/// Occupation criterion
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OccupationCriterion {
    /// The "Child" sentinel: matches members younger than the child age limit
    Child,
    /// Exact (normalized) occupation name
    Named(String),
}

impl OccupationCriterion {
    /// Parse caller input
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = norm(raw);
        if normalized == "child" {
            Self::Child
        } else {
            Self::Named(normalized)
        }
    }
}

impl fmt::Display for OccupationCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Child => f.write_str("Child"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Flat wire form of the filter criteria
///
/// Field names follow the UI's JSON keys. Missing, `null` and blank values all
/// mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilterCriteria {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub q: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub street: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub occupation: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub education: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub quran: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub maktab: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub gender: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub min_age: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub max_age: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub baligh: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub dawat: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub dawat_count_key: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub dawat_count_times: String,
}

/// Typed filter criteria consumed by the engine
///
/// Every field is optional; `None` means the corresponding predicate is
/// vacuously true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    /// Free-text query, normalized
    pub query: Option<String>,
    /// Street name, normalized
    pub street: Option<String>,
    pub occupation: Option<OccupationCriterion>,
    pub education: Option<EducationLevel>,
    pub quran: Option<Selection<YesNo>>,
    pub maktab: Option<Selection<YesNo>>,
    pub gender: Option<Gender>,
    /// Inclusive lower age bound
    pub min_age: Option<AgeBound>,
    /// Inclusive upper age bound
    pub max_age: Option<AgeBound>,
    pub baligh: Option<Selection<YesNo>>,
    pub dawat: Option<Selection<DawatStatus>>,
    pub dawat_count_key: Option<Selection<DawatDuration>>,
    /// Exact count for `dawat_count_key`; ignored when the key is not set
    pub dawat_count_times: Option<NumberInput>,
}

fn non_blank(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}

impl From<RawFilterCriteria> for FilterCriteria {
    fn from(raw: RawFilterCriteria) -> Self {
        Self::from(&raw)
    }
}

impl From<&RawFilterCriteria> for FilterCriteria {
    fn from(raw: &RawFilterCriteria) -> Self {
        Self {
            query: non_blank(&raw.q).map(norm),
            street: non_blank(&raw.street).map(norm),
            occupation: non_blank(&raw.occupation).map(OccupationCriterion::parse),
            education: non_blank(&raw.education).map(EducationLevel::from),
            quran: non_blank(&raw.quran).map(|v| Selection::parse_with(v, YesNo::parse)),
            maktab: non_blank(&raw.maktab).map(|v| Selection::parse_with(v, YesNo::parse)),
            gender: non_blank(&raw.gender).map(Gender::from),
            min_age: non_blank(&raw.min_age).map(AgeBound::parse),
            max_age: non_blank(&raw.max_age).map(AgeBound::parse),
            baligh: non_blank(&raw.baligh).map(|v| Selection::parse_with(v, YesNo::parse)),
            dawat: non_blank(&raw.dawat).map(|v| Selection::parse_with(v, DawatStatus::parse)),
            dawat_count_key: non_blank(&raw.dawat_count_key)
                .map(|v| Selection::parse_with(v, DawatDuration::parse)),
            dawat_count_times: non_blank(&raw.dawat_count_times).map(NumberInput::parse),
        }
    }
}

impl FilterCriteria {
    /// Criteria with nothing set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no criterion at all is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_fields().is_empty()
    }

    /// Wire names of the criteria that are set, in declaration order
    #[must_use]
    pub fn active_fields(&self) -> SmallVec<[&'static str; 13]> {
        let mut fields = SmallVec::new();
        let flags = [
            ("q", self.query.is_some()),
            ("street", self.street.is_some()),
            ("occupation", self.occupation.is_some()),
            ("education", self.education.is_some()),
            ("quran", self.quran.is_some()),
            ("maktab", self.maktab.is_some()),
            ("gender", self.gender.is_some()),
            ("minAge", self.min_age.is_some()),
            ("maxAge", self.max_age.is_some()),
            ("baligh", self.baligh.is_some()),
            ("dawat", self.dawat.is_some()),
            ("dawatCountKey", self.dawat_count_key.is_some()),
            ("dawatCountTimes", self.dawat_count_times.is_some()),
        ];
        for (name, set) in flags {
            if set {
                fields.push(name);
            }
        }
        fields
    }

    /// The same criteria with the free-text query removed
    #[must_use]
    pub fn without_query(&self) -> Self {
        Self {
            query: None,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = non_blank(query).map(norm);
        self
    }

    #[must_use]
    pub fn with_street(mut self, street: &str) -> Self {
        self.street = non_blank(street).map(norm);
        self
    }

    #[must_use]
    pub fn with_occupation(mut self, occupation: &str) -> Self {
        self.occupation = non_blank(occupation).map(OccupationCriterion::parse);
        self
    }

    #[must_use]
    pub fn with_education(mut self, education: EducationLevel) -> Self {
        self.education = Some(education);
        self
    }

    #[must_use]
    pub fn with_quran(mut self, quran: YesNo) -> Self {
        self.quran = Some(Selection::Is(quran));
        self
    }

    #[must_use]
    pub fn with_maktab(mut self, maktab: YesNo) -> Self {
        self.maktab = Some(Selection::Is(maktab));
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set either age bound; `None` leaves that side open
    #[must_use]
    pub fn with_age_range(mut self, min_age: Option<u32>, max_age: Option<u32>) -> Self {
        self.min_age = min_age.map(AgeBound::from);
        self.max_age = max_age.map(AgeBound::from);
        self
    }

    #[must_use]
    pub fn with_baligh(mut self, baligh: YesNo) -> Self {
        self.baligh = Some(Selection::Is(baligh));
        self
    }

    #[must_use]
    pub fn with_dawat(mut self, dawat: DawatStatus) -> Self {
        self.dawat = Some(Selection::Is(dawat));
        self
    }

    /// Require participation in `key`, optionally exactly `times` trips
    #[must_use]
    pub fn with_dawat_count(mut self, key: DawatDuration, times: Option<u32>) -> Self {
        self.dawat_count_key = Some(Selection::Is(key));
        self.dawat_count_times = times.map(NumberInput::Value);
        self
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(no filters)");
        }
        let mut parts: Vec<String> = Vec::new();
        if let Some(q) = &self.query {
            parts.push(format!("q={q}"));
        }
        if let Some(street) = &self.street {
            parts.push(format!("street={street}"));
        }
        if let Some(occupation) = &self.occupation {
            parts.push(format!("occupation={occupation}"));
        }
        if let Some(education) = &self.education {
            parts.push(format!("education={education}"));
        }
        if let Some(quran) = &self.quran {
            parts.push(format!("quran={quran}"));
        }
        if let Some(maktab) = &self.maktab {
            parts.push(format!("maktab={maktab}"));
        }
        if let Some(gender) = &self.gender {
            parts.push(format!("gender={gender}"));
        }
        if let Some(min_age) = &self.min_age {
            parts.push(format!("minAge={min_age}"));
        }
        if let Some(max_age) = &self.max_age {
            parts.push(format!("maxAge={max_age}"));
        }
        if let Some(baligh) = &self.baligh {
            parts.push(format!("baligh={baligh}"));
        }
        if let Some(dawat) = &self.dawat {
            parts.push(format!("dawat={dawat}"));
        }
        if let Some(key) = &self.dawat_count_key {
            parts.push(format!("dawatCountKey={key}"));
        }
        if let Some(times) = &self.dawat_count_times {
            parts.push(format!("dawatCountTimes={times}"));
        }
        f.write_str(&parts.join(", "))
    }
}
