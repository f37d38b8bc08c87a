//! House-level query resolution
//!
//! Decides whether a free-text query identifies a house itself (by number or
//! street) rather than a person living in it. Members are not inspected.

use crate::filter::normalize::{norm, norm_contains};
use crate::models::House;

/// How a query identified a house
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseHit {
    /// The house number equals the query
    NumberExact,
    /// The house number starts with the query
    NumberPrefix,
    /// The street contains the query
    Street,
}

/// Classify `house` against `query`
///
/// The number is checked before the street. An empty query is a prefix of
/// every house number and therefore always hits; callers skip house
/// resolution entirely when no query is set.
#[must_use]
pub fn classify_house(house: &House, query: &str) -> Option<HouseHit> {
    let query = norm(query);
    let number = norm(&house.number);

    if number == query {
        Some(HouseHit::NumberExact)
    } else if number.starts_with(&query) {
        Some(HouseHit::NumberPrefix)
    } else if norm_contains(&house.street, &query) {
        Some(HouseHit::Street)
    } else {
        None
    }
}

/// Whether `query` identifies `house` by number or street
#[must_use]
pub fn is_house_level_hit(house: &House, query: &str) -> bool {
    classify_house(house, query).is_some()
}
