//! Versioned filter results
//!
//! When filtering runs off the UI thread, results can complete out of order.
//! A `FilterSession` numbers each criteria change and only publishes a result
//! if nothing newer has been published already, so a slow, superseded
//! computation can never overwrite the answer to a more recent query.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::criteria::FilterCriteria;
use crate::filter::engine::FilterEngine;
use crate::models::House;

/// Handle for one in-flight computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTicket {
    version: u64,
    criteria: FilterCriteria,
}

impl FilterTicket {
    /// Logical version of this request
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Criteria this request was issued for
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }
}

#[derive(Debug)]
struct Published {
    version: u64,
    houses: Arc<[House]>,
}

/// Last-writer-wins publication of filter results by logical version
#[derive(Debug, Default)]
pub struct FilterSession {
    issued: AtomicU64,
    published: Mutex<Option<Published>>,
}

impl FilterSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Published>> {
        // Publication state stays consistent even if a holder panicked
        self.published.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new criteria value and get its ticket
    pub fn begin(&self, criteria: FilterCriteria) -> FilterTicket {
        let version = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        FilterTicket { version, criteria }
    }

    /// Publish `result` for `ticket` unless a newer result is already published
    ///
    /// Returns whether the result was published.
    pub fn complete(&self, ticket: &FilterTicket, result: Arc<[House]>) -> bool {
        let mut published = self.lock();
        if let Some(current) = published.as_ref() {
            if current.version > ticket.version {
                log::debug!(
                    "Discarding stale filter result v{} (v{} already published)",
                    ticket.version,
                    current.version
                );
                return false;
            }
        }
        *published = Some(Published {
            version: ticket.version,
            houses: result,
        });
        true
    }

    /// Run the combined pass for `ticket` and publish the result
    ///
    /// A ticket that has already been superseded is skipped without filtering.
    pub fn run(&self, engine: &FilterEngine, houses: &[House], ticket: &FilterTicket) -> bool {
        if !self.is_current(ticket) {
            log::debug!("Skipping superseded filter request v{}", ticket.version);
            return false;
        }
        let result: Arc<[House]> = engine.combined(houses, &ticket.criteria).into();
        self.complete(ticket, result)
    }

    /// Most recently issued version, 0 when nothing was issued yet
    #[must_use]
    pub fn issued_version(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Whether `ticket` is still the newest request
    #[must_use]
    pub fn is_current(&self, ticket: &FilterTicket) -> bool {
        ticket.version == self.issued_version()
    }

    /// The published version and its houses
    #[must_use]
    pub fn latest(&self) -> Option<(u64, Arc<[House]>)> {
        self.lock()
            .as_ref()
            .map(|p| (p.version, Arc::clone(&p.houses)))
    }
}
