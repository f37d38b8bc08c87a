//! Registry statistics
//!
//! Counting helpers for filtered (or unfiltered) house collections, used by
//! dashboards and the CLI summary.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

use crate::models::{DawatDuration, Gender, House};

/// Counts over a house collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    /// Number of houses
    pub house_count: usize,
    /// Number of members across all houses
    pub member_count: usize,
    /// Male members
    pub male_count: usize,
    /// Female members
    pub female_count: usize,
    /// Members with another or no recorded gender
    pub other_gender_count: usize,
    /// Members younger than the child age limit
    pub child_count: usize,
    /// Members counted as Baligh
    pub baligh_count: usize,
    /// Members with no historical Dawat trips
    pub no_dawat_count: usize,
    /// Members with at least one trip of each duration
    pub dawat_participation: FxHashMap<DawatDuration, usize>,
}

impl FilterSummary {
    /// Count members and houses in `houses`
    #[must_use]
    pub fn from_houses(houses: &[House]) -> Self {
        let members = houses.iter().flat_map(|house| house.members.iter());

        let mut summary = Self {
            house_count: houses.len(),
            ..Self::default()
        };

        for member in members {
            summary.member_count += 1;
            match &member.gender {
                Some(Gender::Male) => summary.male_count += 1,
                Some(Gender::Female) => summary.female_count += 1,
                Some(Gender::Other(_)) | None => summary.other_gender_count += 1,
            }
            if member.is_child() {
                summary.child_count += 1;
            }
            if member.is_baligh() {
                summary.baligh_count += 1;
            }
            if member.dawat_counts.total() == 0 {
                summary.no_dawat_count += 1;
            }
            for duration in DawatDuration::ALL {
                if member.dawat_counts.get(duration) > 0 {
                    *summary.dawat_participation.entry(duration).or_insert(0) += 1;
                }
            }
        }

        summary
    }

    /// Members with at least one trip of `duration`
    #[must_use]
    pub fn participation(&self, duration: DawatDuration) -> usize {
        self.dawat_participation.get(&duration).copied().unwrap_or(0)
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registry Summary:")?;
        writeln!(f, "  Houses: {}", self.house_count)?;
        writeln!(f, "  Members: {}", self.member_count)?;
        writeln!(
            f,
            "  Male / Female / Other: {} / {} / {}",
            self.male_count, self.female_count, self.other_gender_count
        )?;
        writeln!(f, "  Children: {}", self.child_count)?;
        writeln!(f, "  Baligh: {}", self.baligh_count)?;
        writeln!(f, "  No Dawat: {}", self.no_dawat_count)?;
        let participation = DawatDuration::ALL
            .iter()
            .map(|d| format!("{d}: {}", self.participation(*d)))
            .join(", ");
        writeln!(f, "  Dawat Participation: {participation}")
    }
}
