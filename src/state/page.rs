use serde::Serialize;
use std::fmt;

/// The result of fetching and extracting one document
///
/// Built once by the fetch step and never modified afterwards. A page is
/// only kept when its fetch succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Text of the first `<title>`, empty when the document has none
    pub title: String,

    /// Link targets classified as staying on the site, in document order
    pub in_domain_links: Vec<String>,

    /// All other link targets, in document order
    pub out_domain_links: Vec<String>,
}

impl Page {
    /// Total number of links discovered on the page
    pub fn link_count(&self) -> usize {
        self.in_domain_links.len() + self.out_domain_links.len()
    }
}

/// Lists the in-domain links, one indexed line each
impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, link) in self.in_domain_links.iter().enumerate() {
            writeln!(f, "  {}: {}", i, link)?;
        }
        Ok(())
    }
}
