//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made during enrichment, including:
//! - Building the HTTP client with the identifying user agent
//! - Following redirects manually, with a hop limit
//! - Enforcing one wall-clock deadline across every hop and the body read
//! - Classifying failures into [`FetchError`]

use crate::config::UserAgentConfig;
use crate::FetchError;
use reqwest::header::LOCATION;
use reqwest::{redirect::Policy, Client, Response};
use std::future::Future;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use url::Url;

/// Redirect hops followed when no limit is configured
pub const DEFAULT_MAX_REDIRECTS: u32 = 3;

/// Body of a successful fetch, or the reason it failed
pub type FetchResult<T = String> = std::result::Result<T, FetchError>;

/// Builds an HTTP client with proper configuration
///
/// Redirects are disabled at the client level; [`Fetcher`] follows them itself
/// so the hop limit and the shared deadline apply. Unless `allow_http` is set the
/// client only speaks HTTPS.
///
/// # Example
///
/// ```no_run
/// use skill_scout::config::UserAgentConfig;
/// use skill_scout::enrich::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), false).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    allow_http: bool,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .redirect(Policy::none())
        .https_only(!allow_http)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches page bodies under a per-fetch deadline
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
    max_redirects: u32,
    allow_http: bool,
}

impl Fetcher {
    /// Creates an HTTPS-only fetcher
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            allow_http: false,
        }
    }

    pub fn with_max_redirects(mut self, max_redirects: u32) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Also accepts `http://` URLs, for the first request and every redirect
    pub fn with_allow_http(mut self, allow_http: bool) -> Self {
        self.allow_http = allow_http;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches `url` and returns its body as text
    ///
    /// # Request Flow
    ///
    /// 1. Reject a non-HTTPS URL unless plain HTTP is allowed, then GET it
    /// 2. On a 3xx with `Location`, resolve it against the current URL and loop
    ///    (at most `max_redirects` times)
    /// 3. Any status >= 400 fails
    /// 4. Otherwise read the body as text
    ///
    /// The timeout is a single deadline set before the first request; redirects
    /// do not reset it.
    ///
    /// # Failure Classification
    ///
    /// | Condition | Error |
    /// |-----------|-------|
    /// | URL does not parse | `InvalidUrl` |
    /// | `http://` URL or redirect while HTTPS-only | `InsecureUrl` |
    /// | Deadline passed | `Timeout` |
    /// | Status >= 400 | `HttpStatus` |
    /// | Redirect beyond the limit | `TooManyRedirects` |
    /// | Unusable `Location` header | `InvalidLocation` |
    /// | Connection, TLS or body error | `Transport` |
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let deadline = Instant::now() + self.timeout;
        let mut current = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        let mut hops = 0;

        loop {
            check_scheme(&current, self.allow_http)?;
            let response =
                within_deadline(deadline, &current, self.client.get(current.clone()).send())
                    .await?;
            let status = response.status();

            if status.is_redirection() {
                if let Some(next) = redirect_target(&current, &response)? {
                    if hops >= self.max_redirects {
                        return Err(FetchError::TooManyRedirects {
                            url: url.to_string(),
                        });
                    }
                    tracing::trace!("Redirect {} -> {} ({})", current, next, status);
                    current = next;
                    hops += 1;
                    continue;
                }
            }

            if status.as_u16() >= 400 {
                return Err(FetchError::HttpStatus {
                    url: current.to_string(),
                    status: status.as_u16(),
                });
            }

            return within_deadline(deadline, &current, response.text()).await;
        }
    }
}

/// Fails unless `url` is HTTPS, or HTTP while `allow_http` is set
fn check_scheme(url: &Url, allow_http: bool) -> FetchResult<()> {
    match url.scheme() {
        "https" => Ok(()),
        "http" if allow_http => Ok(()),
        _ => Err(FetchError::InsecureUrl {
            url: url.to_string(),
        }),
    }
}

/// Resolves the `Location` header of a redirect, if present
fn redirect_target(current: &Url, response: &Response) -> Result<Option<Url>, FetchError> {
    let Some(location) = response.headers().get(LOCATION) else {
        return Ok(None);
    };

    let invalid = || FetchError::InvalidLocation {
        url: current.to_string(),
        location: String::from_utf8_lossy(location.as_bytes()).into_owned(),
    };

    let location = location.to_str().map_err(|_| invalid())?;
    current.join(location).map(Some).map_err(|_| invalid())
}

/// Awaits a request step, mapping the deadline and transport errors
async fn within_deadline<T>(
    deadline: Instant,
    url: &Url,
    step: impl Future<Output = Result<T, reqwest::Error>>,
) -> FetchResult<T> {
    match timeout_at(deadline, step).await {
        Err(_) => Err(FetchError::Timeout {
            url: url.to_string(),
        }),
        Ok(Err(e)) if e.is_timeout() => Err(FetchError::Timeout {
            url: url.to_string(),
        }),
        Ok(Err(source)) => Err(FetchError::Transport {
            url: url.to_string(),
            source,
        }),
        Ok(Ok(value)) => Ok(value),
    }
}
