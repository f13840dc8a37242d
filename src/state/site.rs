//! The site aggregate shared by every crawl task
//!
//! All mutable crawl state (the visited registry and the page map) sits
//! behind one mutex. Callers never see the lock; each public method takes it
//! once, performs one logical step, and releases it before returning.

use crate::state::{Page, VisitState, VisitedRegistry};
use crate::url::resolve_in_domain;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct SiteInner {
    pages: HashMap<String, Page>,
    visited: VisitedRegistry,
}

/// One crawl session
#[derive(Debug)]
pub struct Site {
    /// The seed URL, also the prefix for resolving in-domain links
    domain: String,

    inner: Mutex<SiteInner>,
}

impl Site {
    /// Creates an empty site for the given seed URL
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            inner: Mutex::new(SiteInner::default()),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// A panicking task must not wedge the rest of the crawl, so a poisoned
    /// lock is recovered. Every critical section leaves the maps consistent
    /// before it can panic.
    fn lock(&self) -> MutexGuard<'_, SiteInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claims a URL so that exactly one task fetches it
    ///
    /// Returns true if the caller won the claim.
    pub fn try_claim(&self, url: &str) -> bool {
        self.lock().visited.try_claim(url)
    }

    /// Records a successful fetch and claims the page's in-domain links
    ///
    /// Under a single lock acquisition this stores the page, marks `url`
    /// fetched, resolves each in-domain link against the domain and claims
    /// it. Claims follow the order the links appear on the page.
    ///
    /// # Returns
    ///
    /// The resolved URLs this call newly claimed. The caller owns them and
    /// is expected to schedule a fetch for each.
    pub fn record_success(&self, url: &str, page: Page) -> Vec<String> {
        let mut inner = self.lock();
        inner.visited.mark_attempted(url, true);

        let claimed = page
            .in_domain_links
            .iter()
            .map(|link| resolve_in_domain(&self.domain, link))
            .filter(|resolved| inner.visited.try_claim(resolved))
            .collect();

        inner.pages.insert(url.to_string(), page);
        claimed
    }

    /// Records a failed fetch, releasing the claim on `url`
    ///
    /// The URL may be claimed again by a later discovery.
    pub fn record_failure(&self, url: &str) {
        self.lock().visited.mark_attempted(url, false);
    }

    /// Returns a copy of the page recorded for `url`, if any
    pub fn page(&self, url: &str) -> Option<Page> {
        self.lock().pages.get(url).cloned()
    }

    /// Returns the registry state of `url`, or None if it is not known
    pub fn visit_state(&self, url: &str) -> Option<VisitState> {
        self.lock().visited.get(url)
    }

    /// Number of pages recorded so far
    pub fn page_count(&self) -> usize {
        self.lock().pages.len()
    }

    /// Number of URLs currently in the registry
    pub fn known_count(&self) -> usize {
        self.lock().visited.len()
    }

    /// Snapshot of all recorded pages, ordered by URL
    pub fn pages(&self) -> BTreeMap<String, Page> {
        self.lock()
            .pages
            .iter()
            .map(|(url, page)| (url.clone(), page.clone()))
            .collect()
    }

    /// Snapshot of the registry, ordered by URL
    pub fn visited(&self) -> BTreeMap<String, VisitState> {
        self.lock()
            .visited
            .iter()
            .map(|(url, state)| (url.to_string(), state))
            .collect()
    }
}
