//! Member entity model
//!
//! A Member is a single person registered under a house. All fields are
//! populated at construction time with documented defaults, so the predicates
//! never have to deal with missing attributes.

use serde::{Deserialize, Serialize};

use crate::models::serde::{
    deserialize_age, deserialize_dawat_counts, deserialize_dawat_status, deserialize_education,
    deserialize_gender, deserialize_text, deserialize_yes_no, deserialize_yes_no_or_no,
};
use crate::models::types::{
    CHILD_AGE_LIMIT, DawatCounts, DawatDuration, DawatStatus, EducationLevel, Gender, YesNo,
};

/// A person living in a house
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member identifier
    #[serde(default, alias = "_id", deserialize_with = "deserialize_text")]
    pub id: String,
    /// Display name
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    /// Father's name
    #[serde(default, deserialize_with = "deserialize_text")]
    pub father_name: String,
    /// Contact number
    #[serde(default, deserialize_with = "deserialize_text")]
    pub phone: String,
    /// Gender, `None` when not recorded
    #[serde(default, deserialize_with = "deserialize_gender")]
    pub gender: Option<Gender>,
    /// Age in years, `None` when missing or not a number
    #[serde(default, deserialize_with = "deserialize_age")]
    pub age: Option<u32>,
    /// Occupation as free text ("Child" is used for children on some forms)
    #[serde(default, deserialize_with = "deserialize_text")]
    pub occupation: String,
    /// Highest education level
    #[serde(default, deserialize_with = "deserialize_education")]
    pub education: Option<EducationLevel>,
    /// Whether the member reads the Quran
    #[serde(default, deserialize_with = "deserialize_yes_no")]
    pub quran: Option<YesNo>,
    /// Whether a child attends Maktab
    #[serde(default, deserialize_with = "deserialize_yes_no_or_no")]
    pub maktab: YesNo,
    /// Current Dawat status
    #[serde(default, deserialize_with = "deserialize_dawat_status")]
    pub dawat: DawatStatus,
    /// Historical Dawat trips per duration
    #[serde(default, deserialize_with = "deserialize_dawat_counts")]
    pub dawat_counts: DawatCounts,
}

impl Member {
    /// Create a member with an id and name; every other field takes its default
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_father_name(mut self, father_name: impl Into<String>) -> Self {
        self.father_name = father_name.into();
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    #[must_use]
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = occupation.into();
        self
    }

    #[must_use]
    pub fn with_education(mut self, education: EducationLevel) -> Self {
        self.education = Some(education);
        self
    }

    #[must_use]
    pub fn with_quran(mut self, quran: YesNo) -> Self {
        self.quran = Some(quran);
        self
    }

    #[must_use]
    pub fn with_maktab(mut self, maktab: YesNo) -> Self {
        self.maktab = maktab;
        self
    }

    #[must_use]
    pub fn with_dawat(mut self, dawat: DawatStatus) -> Self {
        self.dawat = dawat;
        self
    }

    /// Set the historical count for one Dawat duration
    #[must_use]
    pub fn with_dawat_count(mut self, duration: DawatDuration, count: u32) -> Self {
        self.dawat_counts.set(duration, count);
        self
    }

    /// Whether the member is known to be younger than the child age limit
    #[must_use]
    pub fn is_child(&self) -> bool {
        self.age.is_some_and(|age| age < CHILD_AGE_LIMIT)
    }

    /// Whether the member is known to be at or above the child age limit
    #[must_use]
    pub fn is_adult(&self) -> bool {
        self.age.is_some_and(|age| age >= CHILD_AGE_LIMIT)
    }

    /// Religious maturity as derived by the registry: a male aged 14 or over
    #[must_use]
    pub fn is_baligh(&self) -> bool {
        self.gender == Some(Gender::Male) && self.is_adult()
    }
}
