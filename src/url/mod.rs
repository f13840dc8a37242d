//! URL handling module for Sumi-Reach
//!
//! Link classification and resolution here are purely lexical. Nothing is
//! parsed as a URL: relative vs. absolute forms, trailing slashes and query
//! strings all stay distinct identities.

mod matcher;
mod resolve;

// Re-export main functions
pub use matcher::is_in_domain;
pub use resolve::resolve_in_domain;

/// Link classification types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkClass {
    /// Site-relative path that the crawl may follow
    InDomain,
    /// Everything else: other hosts, protocol-relative, fragments
    OutDomain,
}

/// Classifies a raw link target as found in an `href` attribute
///
/// # Examples
///
/// ```
/// use sumi_reach::url::{classify_link, LinkClass};
///
/// assert_eq!(classify_link("/docs/page"), LinkClass::InDomain);
/// assert_eq!(classify_link("//example.com/x"), LinkClass::OutDomain);
/// assert_eq!(classify_link("https://other.org/"), LinkClass::OutDomain);
/// ```
pub fn classify_link(href: &str) -> LinkClass {
    if is_in_domain(href) {
        LinkClass::InDomain
    } else {
        LinkClass::OutDomain
    }
}
