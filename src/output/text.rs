//! Plain text report
//!
//! Layout:
//!
//! ```text
//! domain: https://golang.org/
//! https://golang.org/doc/:
//!   0: /doc/install
//!
//! scraped?:true: https://golang.org/doc/
//! scraped?:false: https://golang.org/doc/install
//!
//! pages: 1, known: 2, unfetched: 1, out-of-domain links: 0, elapsed: 12ms
//! ```

use crate::output::traits::{CrawlReport, OutputHandler, OutputResult};
use std::io::Write;

/// Renders the report as a human-readable listing
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOutput;

impl OutputHandler for TextOutput {
    fn write_report(&self, report: &CrawlReport, out: &mut dyn Write) -> OutputResult<()> {
        writeln!(out, "domain: {}", report.domain)?;
        for (url, page) in &report.pages {
            writeln!(out, "{}:", url)?;
            write!(out, "{}", page)?;
        }
        writeln!(out)?;

        for (url, state) in &report.visited {
            writeln!(out, "scraped?:{}: {}", state.is_fetched(), url)?;
        }
        writeln!(out)?;

        let stats = &report.stats;
        writeln!(
            out,
            "pages: {}, known: {}, unfetched: {}, out-of-domain links: {}, elapsed: {}ms",
            stats.pages_recorded,
            stats.urls_known,
            stats.urls_unfetched,
            stats.out_domain_links,
            stats.elapsed_ms
        )?;

        Ok(())
    }
}
