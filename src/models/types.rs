//! Common domain type definitions
//!
//! This module contains the closed enum types used by the member model and the
//! filter criteria. Text coming from outside the engine is converted into these
//! types once, so predicates compare enum values rather than loose strings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::filter::normalize::norm;

/// Age below which a member counts as a child
pub const CHILD_AGE_LIMIT: u32 = 14;

/// Gender of a member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    /// Male gender ("male" or "m")
    Male,
    /// Female gender ("female" or "f")
    Female,
    /// Any other value, stored normalized
    Other(String),
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match norm(s).as_str() {
            "m" | "male" => Self::Male,
            "f" | "female" => Self::Female,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("Male"),
            Self::Female => f.write_str("Female"),
            Self::Other(value) => f.write_str(value),
        }
    }
}

/// Highest completed education level
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EducationLevel {
    /// No formal schooling
    Illiterate,
    /// Primary school
    Primary,
    /// Middle school
    Middle,
    /// Secondary school (SSC)
    Secondary,
    /// Higher secondary school (HSC)
    HigherSecondary,
    /// University graduate
    Graduate,
    /// Post graduate degree
    PostGraduate,
    /// Memorised the Quran
    Hafiz,
    /// Completed the Alim course
    Alim,
    /// Any level outside the known set, stored normalized
    Other(String),
}

impl From<&str> for EducationLevel {
    fn from(s: &str) -> Self {
        match norm(s).as_str() {
            "illiterate" | "none" => Self::Illiterate,
            "primary" => Self::Primary,
            "middle" => Self::Middle,
            "secondary" | "ssc" => Self::Secondary,
            "higher secondary" | "higher-secondary" | "hsc" => Self::HigherSecondary,
            "graduate" => Self::Graduate,
            "post graduate" | "post-graduate" | "postgraduate" => Self::PostGraduate,
            "hafiz" => Self::Hafiz,
            "alim" => Self::Alim,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for EducationLevel {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<EducationLevel> for String {
    fn from(value: EducationLevel) -> Self {
        value.to_string()
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Illiterate => "Illiterate",
            Self::Primary => "Primary",
            Self::Middle => "Middle",
            Self::Secondary => "Secondary",
            Self::HigherSecondary => "Higher Secondary",
            Self::Graduate => "Graduate",
            Self::PostGraduate => "Post Graduate",
            Self::Hafiz => "Hafiz",
            Self::Alim => "Alim",
            Self::Other(value) => value,
        };
        f.write_str(label)
    }
}

/// A yes/no flag as captured on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    /// Yes
    Yes,
    /// No
    #[default]
    No,
}

impl YesNo {
    /// Parse a flag, returning `None` for anything other than yes/no
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match norm(s).as_str() {
            "yes" | "y" => Some(Self::Yes),
            "no" | "n" => Some(Self::No),
            _ => None,
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("yes"),
            Self::No => f.write_str("no"),
        }
    }
}

/// Duration of a Dawat trip, used as the key of the historical counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DawatDuration {
    /// Three day trip
    #[serde(rename = "3-day")]
    ThreeDay,
    /// Ten day trip
    #[serde(rename = "10-day")]
    TenDay,
    /// Forty day trip
    #[serde(rename = "40-day")]
    FortyDay,
    /// Four month trip
    #[serde(rename = "4-month")]
    FourMonth,
}

impl DawatDuration {
    /// All durations in display order
    pub const ALL: [Self; 4] = [Self::ThreeDay, Self::TenDay, Self::FortyDay, Self::FourMonth];

    /// Parse a duration key such as "3-day" or "4 month"
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match norm(s).replace(' ', "-").as_str() {
            "3-day" | "3-days" => Some(Self::ThreeDay),
            "10-day" | "10-days" => Some(Self::TenDay),
            "40-day" | "40-days" => Some(Self::FortyDay),
            "4-month" | "4-months" => Some(Self::FourMonth),
            _ => None,
        }
    }

    /// Wire key of this duration
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ThreeDay => "3-day",
            Self::TenDay => "10-day",
            Self::FortyDay => "40-day",
            Self::FourMonth => "4-month",
        }
    }
}

impl fmt::Display for DawatDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current Dawat status of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DawatStatus {
    /// No Dawat trip
    #[default]
    Nil,
    /// Currently recorded as a trip of the given duration
    #[serde(untagged)]
    Trip(DawatDuration),
}

impl DawatStatus {
    /// Parse a status label, returning `None` for unknown labels
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if norm(s) == "nil" {
            return Some(Self::Nil);
        }
        DawatDuration::parse(s).map(Self::Trip)
    }
}

impl fmt::Display for DawatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("Nil"),
            Self::Trip(duration) => fmt::Display::fmt(duration, f),
        }
    }
}

/// Historical number of Dawat trips per duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DawatCounts {
    /// Three day trips
    #[serde(rename = "3-day", default)]
    pub three_day: u32,
    /// Ten day trips
    #[serde(rename = "10-day", default)]
    pub ten_day: u32,
    /// Forty day trips
    #[serde(rename = "40-day", default)]
    pub forty_day: u32,
    /// Four month trips
    #[serde(rename = "4-month", default)]
    pub four_month: u32,
}

impl DawatCounts {
    /// Count for a single duration
    #[must_use]
    pub const fn get(&self, duration: DawatDuration) -> u32 {
        match duration {
            DawatDuration::ThreeDay => self.three_day,
            DawatDuration::TenDay => self.ten_day,
            DawatDuration::FortyDay => self.forty_day,
            DawatDuration::FourMonth => self.four_month,
        }
    }

    /// Set the count for a single duration
    pub fn set(&mut self, duration: DawatDuration, count: u32) {
        match duration {
            DawatDuration::ThreeDay => self.three_day = count,
            DawatDuration::TenDay => self.ten_day = count,
            DawatDuration::FortyDay => self.forty_day = count,
            DawatDuration::FourMonth => self.four_month = count,
        }
    }

    /// Sum over all four durations
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.three_day
            .saturating_add(self.ten_day)
            .saturating_add(self.forty_day)
            .saturating_add(self.four_month)
    }
}
