//! Field predicates
//!
//! One pure predicate per filterable attribute, plus [`MemberFilter`], which
//! compiles a [`FilterCriteria`] into the conjunction of its active
//! predicates so the per-member loop does not re-inspect the criteria.

use crate::criteria::{AgeBound, FilterCriteria, NumberInput, OccupationCriterion, Selection};
use crate::filter::normalize::{norm, norm_contains, norm_eq};
use crate::models::types::{DawatDuration, DawatStatus, EducationLevel, Gender, YesNo};
use crate::models::{House, Member};

/// Defines a criterion an entity either meets or does not
pub trait MeetsCriteria<T: ?Sized> {
    /// Determine if an entity meets the criterion
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A member together with the house it belongs to
#[derive(Debug, Clone, Copy)]
pub struct MemberInHouse<'a> {
    pub house: &'a House,
    pub member: &'a Member,
}

impl<'a> MemberInHouse<'a> {
    #[must_use]
    pub const fn new(house: &'a House, member: &'a Member) -> Self {
        Self { house, member }
    }
}

/// Gender, with "m"/"male" and "f"/"female" treated as synonyms
#[must_use]
pub fn matches_gender(member: &Member, gender: &Gender) -> bool {
    member.gender.as_ref() == Some(gender)
}

/// Case-insensitive substring search over name, father's name, phone and occupation
///
/// An empty query matches everyone.
#[must_use]
pub fn matches_search(member: &Member, query: &str) -> bool {
    let needle = norm(query);
    if needle.is_empty() {
        return true;
    }
    [
        member.name.as_str(),
        member.father_name.as_str(),
        member.phone.as_str(),
        member.occupation.as_str(),
    ]
    .into_iter()
    .any(|field| norm_contains(field, &needle))
}

/// Occupation; the "Child" sentinel means "younger than 14" whatever the field says
#[must_use]
pub fn matches_occupation(member: &Member, occupation: &OccupationCriterion) -> bool {
    match occupation {
        OccupationCriterion::Child => member.is_child(),
        OccupationCriterion::Named(name) => norm_eq(&member.occupation, name),
    }
}

#[must_use]
pub fn matches_education(member: &Member, education: &EducationLevel) -> bool {
    member.education.as_ref() == Some(education)
}

#[must_use]
pub fn matches_quran(member: &Member, quran: &Selection<YesNo>) -> bool {
    match quran {
        Selection::Is(wanted) => member.quran == Some(*wanted),
        Selection::Unrecognized(_) => false,
    }
}

/// Maktab attendance; members aged 14 or over never match
#[must_use]
pub fn matches_maktab(member: &Member, maktab: &Selection<YesNo>) -> bool {
    if member.is_adult() {
        return false;
    }
    match maktab {
        Selection::Is(wanted) => member.maktab == *wanted,
        Selection::Unrecognized(_) => false,
    }
}

/// Dawat participation
///
/// "Nil" matches only members with no historical trips at all, whatever their
/// current status says. A duration matches either the current status or a
/// non-zero historical count for that duration.
#[must_use]
pub fn matches_dawat(member: &Member, dawat: &Selection<DawatStatus>) -> bool {
    match dawat {
        Selection::Is(DawatStatus::Nil) => member.dawat_counts.total() == 0,
        Selection::Is(DawatStatus::Trip(duration)) => {
            member.dawat == DawatStatus::Trip(*duration) || member.dawat_counts.get(*duration) > 0
        }
        Selection::Unrecognized(_) => false,
    }
}

/// Historical Dawat count for one duration
///
/// With an exact count the stored count must equal it, otherwise any non-zero
/// count matches.
#[must_use]
pub fn matches_dawat_count(
    member: &Member,
    key: &Selection<DawatDuration>,
    times: Option<&NumberInput>,
) -> bool {
    let Selection::Is(duration) = key else {
        return false;
    };
    let count = member.dawat_counts.get(*duration);
    match times {
        Some(NumberInput::Value(exact)) => count == *exact,
        Some(NumberInput::Invalid(_)) => false,
        None => count > 0,
    }
}

/// Inclusive age range; a member without a usable age fails once any bound is set
///
/// Bounds are compared as real numbers, so a fractional bound is not rounded.
#[must_use]
pub fn matches_age_range(
    member: &Member,
    min_age: Option<&AgeBound>,
    max_age: Option<&AgeBound>,
) -> bool {
    if min_age.is_none() && max_age.is_none() {
        return true;
    }
    let Some(age) = member.age.map(f64::from) else {
        return false;
    };
    let above_min = match min_age {
        Some(bound) => bound.value().is_some_and(|min| age >= min),
        None => true,
    };
    let below_max = match max_age {
        Some(bound) => bound.value().is_some_and(|max| age <= max),
        None => true,
    };
    above_min && below_max
}

/// Baligh status, derived as "male and aged 14 or over"
///
/// "no" therefore matches every female member and every boy under 14.
#[must_use]
pub fn matches_baligh(member: &Member, baligh: &Selection<YesNo>) -> bool {
    match baligh {
        Selection::Is(YesNo::Yes) => member.is_baligh(),
        Selection::Is(YesNo::No) => !member.is_baligh(),
        Selection::Unrecognized(_) => false,
    }
}

/// Exact normalized street of the owning house
#[must_use]
pub fn matches_street(house: &House, street: &str) -> bool {
    norm_eq(&house.street, street)
}

/// A predicate that can be applied to a member in the context of its house
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberFilter {
    /// Free-text search over the member's text fields
    Search(String),
    /// Street of the owning house
    Street(String),
    Occupation(OccupationCriterion),
    Education(EducationLevel),
    Quran(Selection<YesNo>),
    Maktab(Selection<YesNo>),
    Gender(Gender),
    /// Inclusive age bounds
    AgeRange {
        min_age: Option<AgeBound>,
        max_age: Option<AgeBound>,
    },
    Baligh(Selection<YesNo>),
    Dawat(Selection<DawatStatus>),
    /// Historical count for one duration, optionally an exact count
    DawatCount {
        key: Selection<DawatDuration>,
        times: Option<NumberInput>,
    },
    /// Requires all filters to match; empty means "match everything"
    All(Vec<MemberFilter>),
}

impl MemberFilter {
    /// Compile the active criteria into a single conjunction
    #[must_use]
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut filters = Vec::new();

        if let Some(query) = &criteria.query {
            filters.push(Self::Search(query.clone()));
        }
        if let Some(street) = &criteria.street {
            filters.push(Self::Street(street.clone()));
        }
        if let Some(occupation) = &criteria.occupation {
            filters.push(Self::Occupation(occupation.clone()));
        }
        if let Some(education) = &criteria.education {
            filters.push(Self::Education(education.clone()));
        }
        if let Some(quran) = &criteria.quran {
            filters.push(Self::Quran(quran.clone()));
        }
        if let Some(maktab) = &criteria.maktab {
            filters.push(Self::Maktab(maktab.clone()));
        }
        if let Some(gender) = &criteria.gender {
            filters.push(Self::Gender(gender.clone()));
        }
        if criteria.min_age.is_some() || criteria.max_age.is_some() {
            filters.push(Self::AgeRange {
                min_age: criteria.min_age.clone(),
                max_age: criteria.max_age.clone(),
            });
        }
        if let Some(baligh) = &criteria.baligh {
            filters.push(Self::Baligh(baligh.clone()));
        }
        if let Some(dawat) = &criteria.dawat {
            filters.push(Self::Dawat(dawat.clone()));
        }
        // An exact count without a key does not constrain anything
        if let Some(key) = &criteria.dawat_count_key {
            filters.push(Self::DawatCount {
                key: key.clone(),
                times: criteria.dawat_count_times.clone(),
            });
        }

        Self::All(filters)
    }

    /// Clone the members of `house` accepted by this filter, in order
    #[must_use]
    pub fn select_members(&self, house: &House) -> Vec<Member> {
        house
            .members
            .iter()
            .filter(|member| self.meets_criteria(&MemberInHouse::new(house, member)))
            .cloned()
            .collect()
    }
}

impl MeetsCriteria<MemberInHouse<'_>> for MemberFilter {
    fn meets_criteria(&self, entity: &MemberInHouse<'_>) -> bool {
        let member = entity.member;
        match self {
            Self::Search(query) => matches_search(member, query),
            Self::Street(street) => matches_street(entity.house, street),
            Self::Occupation(occupation) => matches_occupation(member, occupation),
            Self::Education(education) => matches_education(member, education),
            Self::Quran(quran) => matches_quran(member, quran),
            Self::Maktab(maktab) => matches_maktab(member, maktab),
            Self::Gender(gender) => matches_gender(member, gender),
            Self::AgeRange { min_age, max_age } => {
                matches_age_range(member, min_age.as_ref(), max_age.as_ref())
            }
            Self::Baligh(baligh) => matches_baligh(member, baligh),
            Self::Dawat(dawat) => matches_dawat(member, dawat),
            Self::DawatCount { key, times } => matches_dawat_count(member, key, times.as_ref()),
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(entity)),
        }
    }
}
