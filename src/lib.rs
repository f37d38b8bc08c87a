//! A Rust library for filtering and searching a community registry of houses
//! and their members.

pub mod config;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod statistics;

// Re-export the most common types for easier use
pub use config::EngineConfig;
pub use criteria::{
    AgeBound, FilterCriteria, NumberInput, OccupationCriterion, RawFilterCriteria, Selection,
};
pub use error::{CommunityError, Result};
pub use models::{
    DawatCounts, DawatDuration, DawatStatus, EducationLevel, Gender, House, Member, YesNo,
};

// Filtering capabilities
pub use filter::{
    FilterEngine, FilterMode, FilterSession, FilterTicket, MemoizedFilter, apply_combined_filters,
    apply_member_filters, is_house_level_hit,
};
pub use statistics::FilterSummary;

// Loading
pub use loader::{criteria_from_value, houses_from_value, load_criteria, load_houses};
