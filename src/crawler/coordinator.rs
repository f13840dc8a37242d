//! Crawler coordinator - recursive concurrent crawl orchestration
//!
//! Each URL is handled by its own tokio task that moves through:
//! - spawned: the URL was claimed by the task that discovered it
//! - fetching: the document is retrieved without holding any lock
//! - recording: the page (or the failure) is written to the [`Site`]
//! - fanning-out: newly claimed in-domain links get their own tasks with
//!   one less unit of depth
//! - done: the task's guard is released
//!
//! A task whose remaining depth is zero or less goes straight to done.
//! Fan-out is unbounded: one task per newly claimed URL. An optional
//! semaphore caps how many fetches are in flight at once, without changing
//! which URLs are claimed or when.

use crate::config::Config;
use crate::crawler::fetcher::{fetch_page, HttpTransport, Transport};
use crate::crawler::tasks::{TaskCounter, TaskGuard};
use crate::state::Site;
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Main crawler coordinator structure
///
/// Cloning is cheap: every clone shares the same site, transport, task
/// counter and fetch limit.
pub struct Crawler<T: Transport> {
    site: Arc<Site>,
    transport: Arc<T>,
    tasks: TaskCounter,
    fetch_permits: Option<Arc<Semaphore>>,
}

impl<T: Transport> Clone for Crawler<T> {
    fn clone(&self) -> Self {
        Self {
            site: Arc::clone(&self.site),
            transport: Arc::clone(&self.transport),
            tasks: self.tasks.clone(),
            fetch_permits: self.fetch_permits.clone(),
        }
    }
}

impl<T: Transport> Crawler<T> {
    /// Creates a crawler over an empty site rooted at `seed`
    pub fn new(seed: impl Into<String>, transport: T) -> Self {
        Self {
            site: Arc::new(Site::new(seed)),
            transport: Arc::new(transport),
            tasks: TaskCounter::new(),
            fetch_permits: None,
        }
    }

    /// Caps the number of fetches in flight at once
    ///
    /// A limit of zero is treated as one.
    pub fn with_fetch_limit(mut self, limit: usize) -> Self {
        self.fetch_permits = Some(Arc::new(Semaphore::new(limit.max(1))));
        self
    }

    /// The site this crawler records into
    pub fn site(&self) -> &Arc<Site> {
        &self.site
    }

    /// Number of tasks currently spawned and not yet done
    pub fn outstanding_tasks(&self) -> usize {
        self.tasks.outstanding()
    }

    /// Crawls from the seed with the given depth budget
    ///
    /// Returns once every task spawned by this crawl, transitively, is done.
    /// A depth of zero or less records nothing and leaves the registry
    /// untouched.
    pub async fn run(&self, depth: i32) -> Arc<Site> {
        let seed = self.site.domain().to_string();

        if depth <= 0 {
            tracing::info!("Depth {} leaves nothing to crawl from {}", depth, seed);
            return Arc::clone(&self.site);
        }

        if self.site.try_claim(&seed) {
            tracing::info!("Starting crawl of {} with depth {}", seed, depth);
            self.spawn(seed, depth);
        } else {
            tracing::debug!("Seed {} already claimed, nothing to start", seed);
        }

        self.tasks.wait().await;

        tracing::info!(
            "Crawl completed: {} pages recorded, {} URLs known",
            self.site.page_count(),
            self.site.known_count()
        );

        Arc::clone(&self.site)
    }

    /// Spawns a task for a URL the caller has already claimed
    fn spawn(&self, url: String, depth: i32) {
        let guard = self.tasks.enter();
        tracing::trace!("Spawning task for {} (depth {})", url, depth);
        tokio::spawn(self.clone().visit(url, depth, guard));
    }

    /// Runs one task to completion
    ///
    /// Boxed because the task spawns more of itself.
    fn visit(self, url: String, depth: i32, guard: TaskGuard) -> BoxFuture<'static, ()> {
        async move {
            let _guard = guard;

            if depth <= 0 {
                tracing::trace!("Depth exhausted at {}", url);
                return;
            }

            let fetched = {
                let _permit = match &self.fetch_permits {
                    Some(permits) => Arc::clone(permits).acquire_owned().await.ok(),
                    None => None,
                };
                tracing::debug!("Fetching {}", url);
                fetch_page(self.transport.as_ref(), &url).await
            };

            match fetched {
                Ok(page) => {
                    tracing::info!("found: {} {:?}", url, page.title);

                    let claimed = self.site.record_success(&url, page);
                    if !claimed.is_empty() {
                        tracing::debug!("{} new links claimed from {}", claimed.len(), url);
                    }

                    for child in claimed {
                        self.spawn(child, depth - 1);
                    }
                }
                Err(e) => {
                    self.site.record_failure(&url);
                    tracing::warn!("{}", e);
                }
            }
        }
        .boxed()
    }
}

/// Crawls `seed` to `depth` using the given transport
///
/// # Example
///
/// ```no_run
/// use sumi_reach::crawler::{crawl, HttpTransport};
/// use sumi_reach::config::Config;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = HttpTransport::from_config(&Config::default())?;
/// let site = crawl("https://golang.org/", 2, transport).await;
/// println!("{} pages", site.page_count());
/// # Ok(())
/// # }
/// ```
pub async fn crawl<T: Transport>(seed: &str, depth: i32, transport: T) -> Arc<Site> {
    Crawler::new(seed, transport).run(depth).await
}

/// Runs a crawl as described by the configuration
///
/// Only building the HTTP client can fail; fetch failures during the crawl
/// are logged and leave the affected URLs out of the page map.
pub async fn run_crawl(config: &Config) -> crate::Result<Arc<Site>> {
    let transport = HttpTransport::from_config(config)?;
    let mut crawler = Crawler::new(config.crawler.seed.clone(), transport);

    if let Some(limit) = config.crawler.max_concurrent_fetches {
        tracing::debug!("Limiting concurrent fetches to {}", limit);
        crawler = crawler.with_fetch_limit(limit);
    }

    Ok(crawler.run(config.crawler.max_depth).await)
}
