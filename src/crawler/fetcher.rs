//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the shared HTTP client
//! - Sending browser-like headers with every request
//! - Applying a per-request timeout
//! - Turning every failure into a short diagnostic

use crate::config::UserAgentConfig;
use crate::url::parse_page_url;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Upper bound on connection setup, independent of the request timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-2xx status
    HttpError {
        /// The HTTP status code
        status_code: u16,
        /// Canonical reason phrase, if the status has one
        reason: Option<String>,
    },

    /// Network error (connection refused, timeout, unreadable body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },

    /// The URL could not be requested at all
    InvalidUrl {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns a short description of the failure, or `None` on success
    pub fn failure_message(&self) -> Option<String> {
        match self {
            FetchResult::Success { .. } => None,
            FetchResult::HttpError {
                status_code,
                reason: Some(reason),
            } => Some(format!("HTTP {} {}", status_code, reason)),
            FetchResult::HttpError {
                status_code,
                reason: None,
            } => Some(format!("HTTP {}", status_code)),
            FetchResult::NetworkError { error } => Some(error.clone()),
            FetchResult::InvalidUrl { error } => Some(format!("invalid URL: {}", error)),
        }
    }
}

/// Builds the HTTP client shared by every fetch of a crawl
///
/// Request headers and timeouts are set per request in [`fetch_url`], so one
/// client serves any header set.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// # Failure Mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | URL does not parse / not HTTP(S) | InvalidUrl |
/// | Timeout (connect, headers or body) | NetworkError "request timed out after Nms" |
/// | Connection refused, DNS failure | NetworkError "connection failed: ..." |
/// | HTTP non-2xx | HttpError |
/// | Body not readable as text | NetworkError "failed to read response body: ..." |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `headers` - The header values sent with the request
/// * `timeout` - Deadline for the whole request, body included
pub async fn fetch_url(
    client: &Client,
    url: &str,
    headers: &UserAgentConfig,
    timeout: Duration,
) -> FetchResult {
    let parsed = match parse_page_url(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            return FetchResult::InvalidUrl {
                error: e.to_string(),
            }
        }
    };

    let response = match client
        .get(parsed)
        .header(USER_AGENT, headers.user_agent.as_str())
        .header(ACCEPT, headers.accept.as_str())
        .header(ACCEPT_LANGUAGE, headers.accept_language.as_str())
        .timeout(timeout)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            return FetchResult::NetworkError {
                error: describe_request_error(&e, timeout),
            }
        }
    };

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
        };
    }

    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) if e.is_timeout() => FetchResult::NetworkError {
            error: describe_request_error(&e, timeout),
        },
        Err(e) => FetchResult::NetworkError {
            error: format!("failed to read response body: {}", e),
        },
    }
}

/// Classifies a reqwest error into a one-line diagnostic
fn describe_request_error(error: &reqwest::Error, timeout: Duration) -> String {
    if error.is_timeout() {
        format!("request timed out after {}ms", timeout.as_millis())
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_builder() {
        format!("invalid request: {}", error)
    } else {
        error.to_string()
    }
}
