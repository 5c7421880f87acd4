use url::Url;

/// Path extensions of non-document assets that are never followed
const ASSET_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "svg", "ico", "bmp", "pdf", "zip", "rar", "tar", "gz",
    "7z", "mp3", "wav", "ogg", "mp4", "webm", "avi", "mov",
];

/// Returns true if both URLs share scheme, host, and port
///
/// Default ports are resolved, so `https://example.com` and
/// `https://example.com:443` are the same origin.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use page_lexicon::url::is_same_origin;
///
/// let page = Url::parse("https://example.com/a").unwrap();
/// assert!(is_same_origin(&page, &Url::parse("https://example.com:443/b").unwrap()));
/// assert!(!is_same_origin(&page, &Url::parse("http://example.com/b").unwrap()));
/// ```
pub fn is_same_origin(a: &Url, b: &Url) -> bool {
    a.origin() == b.origin()
}

/// Returns true if the URL path ends in a known asset extension
pub fn is_asset_path(url: &Url) -> bool {
    let path = url.path().to_lowercase();
    let file_name = path.rsplit('/').next().unwrap_or("");

    match file_name.rsplit_once('.') {
        Some((_, ext)) => ASSET_EXTENSIONS.contains(&ext),
        None => false,
    }
}
