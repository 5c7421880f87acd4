//! Text normalization and script-aware tokenization

use crate::analysis::stopwords::StopwordSet;
use once_cell::sync::Lazy;
use regex::Regex;

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+").expect("email pattern is valid"));

/// Anything that is not a CJK ideograph, a Latin letter, or whitespace
static NOISE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\x{4e00}-\x{9fa5}a-z\s]").expect("noise pattern is valid"));

static WHITESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static LATIN_WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[a-z]{2,}").expect("latin word pattern is valid"));

static CJK_CHAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{4e00}-\x{9fa5}]").expect("CJK pattern is valid"));

/// Normalizes raw page text for tokenization
///
/// # Steps
///
/// 1. Lowercase
/// 2. Remove URLs (`http://...`, `https://...`)
/// 3. Remove email-like substrings (`x@y`)
/// 4. Replace every character other than CJK ideographs, `a-z` and whitespace
///    with a space
/// 5. Collapse whitespace runs and trim
///
/// # Example
///
/// ```
/// use page_lexicon::analysis::clean_text;
///
/// let cleaned = clean_text("Visit https://rust-lang.org or mail hi@rust.dev: Rust 2024!");
/// assert_eq!(cleaned, "visit or mail rust");
/// ```
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_urls = URL_PATTERN.replace_all(&lowered, "");
    let without_emails = EMAIL_PATTERN.replace_all(&without_urls, "");
    let letters_only = NOISE_PATTERN.replace_all(&without_emails, " ");
    WHITESPACE_PATTERN
        .replace_all(&letters_only, " ")
        .trim()
        .to_string()
}

/// Splits cleaned text into Latin words and single CJK characters
///
/// Latin tokens are runs of two or more letters. Every CJK ideograph is a
/// token of its own; there is no multi-character segmentation. All Latin
/// tokens come first, then all CJK tokens, each in text order.
pub fn tokenize(text: &str) -> Vec<String> {
    let latin = LATIN_WORD_PATTERN.find_iter(text);
    let cjk = CJK_CHAR_PATTERN.find_iter(text);

    latin.chain(cjk).map(|m| m.as_str().to_string()).collect()
}

/// Drops stopwords and tokens of a single character
///
/// Every CJK token is one character long, so CJK tokens never survive this
/// filter regardless of the stopword list.
pub fn filter_stopwords(tokens: Vec<String>, stopwords: &StopwordSet) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| token.chars().count() > 1 && !stopwords.contains(token))
        .collect()
}
