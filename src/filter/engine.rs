//! Filter engine entry point
//!
//! `FilterEngine` bundles the configuration used by the member and combined
//! passes. The engine holds no state between calls.

use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::criteria::FilterCriteria;
use crate::filter::combined::filter_combined;
use crate::filter::member_pass::filter_members;
use crate::models::House;

/// Map every house through `f`, keeping the `Some` results in input order
///
/// Large collections are processed with rayon; the output order is the same
/// either way.
pub(crate) fn map_houses<F>(houses: &[House], config: &EngineConfig, f: F) -> Vec<House>
where
    F: Fn(&House) -> Option<House> + Sync + Send,
{
    if config.use_parallel(houses.len()) {
        log::trace!("Processing {} houses in parallel", houses.len());
        houses.par_iter().filter_map(f).collect()
    } else {
        houses.iter().filter_map(f).collect()
    }
}

/// Stateless house/member filter
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    config: EngineConfig,
}

impl FilterEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Filter members by every active criterion, the query included
    #[must_use]
    pub fn member_pass(&self, houses: &[House], criteria: &FilterCriteria) -> Vec<House> {
        filter_members(houses, criteria, &self.config)
    }

    /// Resolve the query per house, then apply the remaining criteria
    #[must_use]
    pub fn combined(&self, houses: &[House], criteria: &FilterCriteria) -> Vec<House> {
        filter_combined(houses, criteria, &self.config)
    }
}
