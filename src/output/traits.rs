//! Output handler traits and types
//!
//! This module defines the trait interface for report renderers and the
//! report snapshot they render.

use crate::state::{Page, Site, VisitState};
use crate::OutputError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Summary counts for a finished crawl
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlStats {
    /// Pages fetched and recorded
    pub pages_recorded: usize,

    /// URLs present in the registry
    pub urls_known: usize,

    /// Registry URLs that were claimed but never fetched
    pub urls_unfetched: usize,

    /// Distinct out-of-domain link targets across all pages
    pub out_domain_links: usize,

    /// Wall-clock crawl time in milliseconds
    pub elapsed_ms: u64,
}

/// Snapshot of a finished crawl, ready to be rendered
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    /// The seed URL
    pub domain: String,

    /// Depth budget the crawl started with
    pub max_depth: i32,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Every recorded page, ordered by URL
    pub pages: BTreeMap<String, Page>,

    /// Final registry contents, ordered by URL
    pub visited: BTreeMap<String, VisitState>,

    /// Distinct out-of-domain link targets seen on any page; never followed
    pub out_domain_links: BTreeSet<String>,

    pub stats: CrawlStats,
}

impl CrawlReport {
    /// Takes a snapshot of the site after its crawl has completed
    pub fn from_site(
        site: &Site,
        max_depth: i32,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let pages = site.pages();
        let visited = site.visited();

        let out_domain_links: BTreeSet<String> = pages
            .values()
            .flat_map(|page| page.out_domain_links.iter().cloned())
            .collect();

        let elapsed_ms = (finished_at - started_at).num_milliseconds().max(0) as u64;

        let stats = CrawlStats {
            pages_recorded: pages.len(),
            urls_known: visited.len(),
            urls_unfetched: visited.values().filter(|s| !s.is_fetched()).count(),
            out_domain_links: out_domain_links.len(),
            elapsed_ms,
        };

        Self {
            domain: site.domain().to_string(),
            max_depth,
            started_at,
            finished_at,
            pages,
            visited,
            out_domain_links,
            stats,
        }
    }
}

/// Trait for report renderers
pub trait OutputHandler {
    /// Renders the report into `out`
    fn write_report(&self, report: &CrawlReport, out: &mut dyn Write) -> OutputResult<()>;

    /// Renders the report into a string
    fn render(&self, report: &CrawlReport) -> OutputResult<String> {
        let mut buf = Vec::new();
        self.write_report(report, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
