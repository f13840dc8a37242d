/// Resolves an in-domain link against the crawl's domain
///
/// The domain is the seed URL itself. Exactly one trailing `/` is trimmed
/// from it before the link is appended, so the result never has a doubled
/// slash at the join for a seed like `https://golang.org/`. No other
/// normalization happens.
///
/// # Examples
///
/// ```
/// use sumi_reach::url::resolve_in_domain;
///
/// assert_eq!(
///     resolve_in_domain("https://golang.org/", "/doc/"),
///     "https://golang.org/doc/"
/// );
/// assert_eq!(
///     resolve_in_domain("https://golang.org", "/doc/"),
///     "https://golang.org/doc/"
/// );
/// ```
pub fn resolve_in_domain(domain: &str, link: &str) -> String {
    let base = domain.strip_suffix('/').unwrap_or(domain);
    format!("{}{}", base, link)
}
