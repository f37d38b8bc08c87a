//! Memoized filtering
//!
//! The UI re-runs the engine on every keystroke, often with inputs identical
//! to the previous call. `MemoizedFilter` remembers the last inputs and
//! result and skips recomputation when both the house collection (by
//! pointer) and the criteria (by value) are unchanged.

use std::sync::Arc;

use crate::criteria::FilterCriteria;
use crate::filter::engine::FilterEngine;
use crate::models::House;

/// Which pass a memoized filter runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Query resolution per house plus the remaining criteria
    #[default]
    Combined,
    /// Every criterion applied to members
    MemberOnly,
}

#[derive(Debug)]
struct CacheEntry {
    houses: Arc<[House]>,
    criteria: FilterCriteria,
    result: Arc<[House]>,
}

/// Single-entry cache around a `FilterEngine`
#[derive(Debug, Default)]
pub struct MemoizedFilter {
    engine: FilterEngine,
    mode: FilterMode,
    last: Option<CacheEntry>,
    hits: u64,
    misses: u64,
}

impl MemoizedFilter {
    #[must_use]
    pub fn new(engine: FilterEngine, mode: FilterMode) -> Self {
        Self {
            engine,
            mode,
            last: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Filter `houses`, reusing the previous result when the inputs are unchanged
    pub fn apply(&mut self, houses: &Arc<[House]>, criteria: &FilterCriteria) -> Arc<[House]> {
        if let Some(entry) = &self.last {
            if Arc::ptr_eq(&entry.houses, houses) && entry.criteria == *criteria {
                self.hits += 1;
                return Arc::clone(&entry.result);
            }
        }

        self.misses += 1;
        let result: Arc<[House]> = match self.mode {
            FilterMode::Combined => self.engine.combined(houses, criteria),
            FilterMode::MemberOnly => self.engine.member_pass(houses, criteria),
        }
        .into();

        self.last = Some(CacheEntry {
            houses: Arc::clone(houses),
            criteria: criteria.clone(),
            result: Arc::clone(&result),
        });
        result
    }

    /// Drop the cached entry
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Number of calls answered from the cache
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of calls that ran the engine
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }
}
