//! Combined house and member filtering
//!
//! A single query box serves two intents: "find house 42" and "find a person
//! called X". Each house is classified independently. When the query names
//! the house (by number or street) all of its members go through; otherwise
//! the query is used as a member search inside that house. The remaining
//! criteria are applied to whatever survives, and empty houses are dropped.

use crate::config::EngineConfig;
use crate::criteria::FilterCriteria;
use crate::filter::engine::map_houses;
use crate::filter::house_pass::classify_house;
use crate::filter::member_pass::filter_members;
use crate::filter::predicates::{MeetsCriteria, MemberFilter, MemberInHouse, matches_search};
use crate::models::{House, Member};

/// Run the combined pass over `houses`
#[must_use]
pub fn filter_combined(
    houses: &[House],
    criteria: &FilterCriteria,
    config: &EngineConfig,
) -> Vec<House> {
    let Some(query) = criteria.query.as_deref() else {
        return filter_members(houses, criteria, config);
    };

    let remaining = MemberFilter::from_criteria(&criteria.without_query());

    let result = map_houses(houses, config, |house| {
        let candidates: Vec<&Member> = match classify_house(house, query) {
            Some(hit) => {
                log::trace!("House {} matched '{query}' as {hit:?}", house.number);
                house.members.iter().collect()
            }
            None => {
                let found: Vec<&Member> = house
                    .members
                    .iter()
                    .filter(|member| matches_search(member, query))
                    .collect();
                if found.is_empty() {
                    return None;
                }
                found
            }
        };

        let members: Vec<Member> = candidates
            .into_iter()
            .filter(|member| remaining.meets_criteria(&MemberInHouse::new(house, member)))
            .cloned()
            .collect();

        if members.is_empty() {
            None
        } else {
            Some(house.with_filtered_members(members))
        }
    });

    if config.log_summaries {
        log::debug!(
            "Combined pass [{criteria}]: kept {} of {} houses",
            result.len(),
            houses.len()
        );
    }

    result
}
