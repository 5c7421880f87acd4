use crate::{UrlError, UrlResult};
use url::Url;

/// Normalizes an entry URL into its canonical scheme-qualified form
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Prefix `https://` when the URL does not start with `http://` or `https://`
///
/// Nothing else is rewritten, so the result is what gets fetched and reported.
/// Applying the function twice gives the same string as applying it once.
///
/// # Examples
///
/// ```
/// use page_lexicon::url::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url(" http://example.com/a "), "http://example.com/a");
/// ```
pub fn normalize_url(input: &str) -> String {
    let url = input.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Parses a normalized URL, accepting only HTTP and HTTPS
pub fn parse_page_url(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(format!("{} ({})", url_str, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::UnsupportedScheme(url.scheme().to_string()));
    }

    Ok(url)
}

/// Computes the key used to decide whether two URLs name the same page
///
/// The key is the parsed URL's serialization without its fragment, so
/// `https://example.com` and `https://example.com/#top` share a key. Strings
/// that do not parse are their own key.
pub fn dedup_key(url_str: &str) -> String {
    match Url::parse(url_str) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => url_str.to_string(),
    }
}
