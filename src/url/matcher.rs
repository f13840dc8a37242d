use regex::Regex;
use std::sync::LazyLock;

/// Naive same-site pattern: a leading `/`, a second character that is
/// neither `/` nor `#`, at least one more character, and no `#` anywhere.
static IN_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/[^/#][^#]+\z").expect("in-domain pattern is a valid regex")
});

/// Checks if a link target stays within the crawled site
///
/// This is a lexical heuristic, not a hostname comparison. Protocol-relative
/// links (`//host/path`) and anything carrying a fragment are treated as
/// leaving the site even when they point back at it. Absolute URLs are
/// always out-of-domain, including ones on the seed's own host.
///
/// # Arguments
///
/// * `href` - The raw attribute value of a link
///
/// # Returns
///
/// * `true` - If the link should be followed as part of the site
/// * `false` - Otherwise
///
/// # Examples
///
/// ```
/// use sumi_reach::url::is_in_domain;
///
/// assert!(is_in_domain("/docs/page"));
/// assert!(!is_in_domain("//example.com/x"));
/// assert!(!is_in_domain("/a#frag"));
/// assert!(!is_in_domain("https://other.org/"));
/// ```
pub fn is_in_domain(href: &str) -> bool {
    IN_DOMAIN.is_match(href)
}
