//! Member-level filtering
//!
//! Applies the conjunction of every active predicate to each member of each
//! house. Houses left without members are dropped, except when no criterion
//! is set at all: then every house is kept, including empty ones, so the
//! unfiltered listing shows the whole registry.

use crate::config::EngineConfig;
use crate::criteria::FilterCriteria;
use crate::filter::engine::map_houses;
use crate::filter::predicates::MemberFilter;
use crate::models::House;

/// Run the member pass over `houses`
#[must_use]
pub fn filter_members(
    houses: &[House],
    criteria: &FilterCriteria,
    config: &EngineConfig,
) -> Vec<House> {
    let filter = MemberFilter::from_criteria(criteria);
    let keep_empty_houses = criteria.is_empty();

    let result = map_houses(houses, config, |house| {
        let members = filter.select_members(house);
        if members.is_empty() && !keep_empty_houses {
            None
        } else {
            Some(house.with_filtered_members(members))
        }
    });

    if config.log_summaries {
        log::debug!(
            "Member pass [{criteria}]: kept {} of {} houses",
            result.len(),
            houses.len()
        );
    }

    result
}
