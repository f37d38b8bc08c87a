//! Hierarchical house and member filtering
//!
//! Two passes are available:
//!
//! * [`apply_member_filters`] applies every criterion to every member and
//!   drops houses that end up empty (unless no criterion is set at all).
//! * [`apply_combined_filters`] first decides per house whether the free-text
//!   query names the house itself or a person in it, then applies the other
//!   criteria on top.
//!
//! Both are pure: inputs are never modified and a new collection is returned.

pub mod combined;
pub mod engine;
pub mod house_pass;
pub mod member_pass;
pub mod memo;
pub mod normalize;
pub mod predicates;
pub mod session;

pub use engine::FilterEngine;
pub use house_pass::{HouseHit, classify_house, is_house_level_hit};
pub use memo::{FilterMode, MemoizedFilter};
pub use normalize::norm;
pub use predicates::{MeetsCriteria, MemberFilter, MemberInHouse};
pub use session::{FilterSession, FilterTicket};

use crate::criteria::FilterCriteria;
use crate::models::House;

/// Apply every active criterion to each member of each house
///
/// A house is kept if any of its members match, or if no criterion is set.
#[must_use]
pub fn apply_member_filters(houses: &[House], criteria: &FilterCriteria) -> Vec<House> {
    FilterEngine::default().member_pass(houses, criteria)
}

/// Resolve the query per house, then apply the remaining criteria
///
/// Houses whose number or street matches the query keep all their members
/// for the remaining criteria; other houses keep only the members the query
/// finds by name, father's name, phone or occupation.
#[must_use]
pub fn apply_combined_filters(houses: &[House], criteria: &FilterCriteria) -> Vec<House> {
    FilterEngine::default().combined(houses, criteria)
}
