//! Output module for the final crawl report
//!
//! This module handles:
//! - Taking a snapshot of the finished site as a [`CrawlReport`]
//! - Rendering it as text or JSON
//! - Writing it to stdout or to the configured file

mod json;
mod text;
mod traits;

pub use json::JsonOutput;
pub use text::TextOutput;
pub use traits::{CrawlReport, CrawlStats, OutputHandler, OutputResult};

use crate::config::{OutputConfig, OutputFormat};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Returns the renderer for a report format
pub fn handler_for(format: OutputFormat) -> Box<dyn OutputHandler> {
    match format {
        OutputFormat::Text => Box::new(TextOutput),
        OutputFormat::Json => Box::new(JsonOutput),
    }
}

/// Renders the report and writes it where the configuration says
///
/// # Returns
///
/// * `Ok(())` - Report written to the file, or to stdout when no path is set
/// * `Err(OutputError)` - Failed to create the file, serialize, or write
pub fn emit_report(report: &CrawlReport, config: &OutputConfig) -> OutputResult<()> {
    let handler = handler_for(config.format);

    match &config.path {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            handler.write_report(report, &mut out)?;
            out.flush()?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            handler.write_report(report, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
