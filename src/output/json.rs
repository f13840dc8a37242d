use crate::output::traits::{CrawlReport, OutputHandler, OutputResult};
use std::io::Write;

/// Renders the report as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOutput;

impl OutputHandler for JsonOutput {
    fn write_report(&self, report: &CrawlReport, out: &mut dyn Write) -> OutputResult<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Page, Site};
    use chrono::Utc;

    #[test]
    fn test_json_shape() {
        let site = Site::new("https://example.com/");
        site.try_claim("https://example.com/");
        site.record_success(
            "https://example.com/",
            Page {
                title: "Home".to_string(),
                in_domain_links: vec!["/docs/a".to_string()],
                out_domain_links: vec!["https://other.org/".to_string()],
            },
        );
        let now = Utc::now();
        let report = CrawlReport::from_site(&site, 2, now, now);

        let rendered = JsonOutput.render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["domain"], "https://example.com/");
        assert_eq!(value["max_depth"], 2);
        assert_eq!(value["pages"]["https://example.com/"]["title"], "Home");
        assert_eq!(
            value["pages"]["https://example.com/"]["in_domain_links"][0],
            "/docs/a"
        );
        assert_eq!(value["visited"]["https://example.com/"], "fetched");
        assert_eq!(value["visited"]["https://example.com/docs/a"], "discovered");
        assert_eq!(value["out_domain_links"][0], "https://other.org/");
        assert_eq!(value["stats"]["pages_recorded"], 1);
    }
}
