//! JSON loading for houses and filter criteria
//!
//! This is the boundary where loosely shaped data enters the engine. A house
//! collection that is not an array is treated as empty, and entries that are
//! not objects are skipped. Only unreadable files and invalid JSON syntax are
//! reported as errors.

use serde_json::Value;
use std::path::Path;

use crate::criteria::{FilterCriteria, RawFilterCriteria};
use crate::error::Result;
use crate::error::util::safe_read_to_string;
use crate::models::House;

/// Convert an already parsed JSON value into houses
#[must_use]
pub fn houses_from_value(value: Value) -> Vec<House> {
    let Value::Array(entries) = value else {
        log::warn!("House data is not an array; treating it as empty");
        return Vec::new();
    };

    let total = entries.len();
    let mut houses = Vec::with_capacity(total);
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            log::warn!("Skipping house entry {index}: not an object");
            continue;
        }
        match serde_json::from_value::<House>(entry) {
            Ok(house) => houses.push(house),
            Err(e) => log::warn!("Skipping house entry {index}: {e}"),
        }
    }

    log::debug!("Loaded {} of {total} house entries", houses.len());
    houses
}

/// Parse houses from JSON text
pub fn houses_from_str(json: &str) -> Result<Vec<House>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(houses_from_value(value))
}

/// Read houses from a JSON file
pub fn load_houses(path: &Path) -> Result<Vec<House>> {
    let content = safe_read_to_string(path, "house data")?;
    let houses = houses_from_str(&content)?;
    log::info!(
        "Loaded {} houses with {} members from {}",
        houses.len(),
        houses.iter().map(House::member_count).sum::<usize>(),
        path.display()
    );
    Ok(houses)
}

/// Convert an already parsed JSON value into filter criteria
///
/// Anything other than an object yields empty criteria.
#[must_use]
pub fn criteria_from_value(value: Value) -> FilterCriteria {
    if !value.is_object() {
        log::warn!("Filter criteria is not an object; no filters applied");
        return FilterCriteria::default();
    }
    match serde_json::from_value::<RawFilterCriteria>(value) {
        Ok(raw) => FilterCriteria::from(raw),
        Err(e) => {
            log::warn!("Unreadable filter criteria ({e}); no filters applied");
            FilterCriteria::default()
        }
    }
}

/// Parse filter criteria from JSON text
pub fn criteria_from_str(json: &str) -> Result<FilterCriteria> {
    let value: Value = serde_json::from_str(json)?;
    Ok(criteria_from_value(value))
}

/// Read filter criteria from a JSON file
pub fn load_criteria(path: &Path) -> Result<FilterCriteria> {
    let content = safe_read_to_string(path, "filter criteria")?;
    let criteria = criteria_from_str(&content)?;
    log::info!("Loaded filter criteria from {}: {criteria}", path.display());
    Ok(criteria)
}
