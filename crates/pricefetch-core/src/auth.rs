//! Yahoo session management: the cookie-and-crumb handshake.
//!
//! Yahoo's unofficial API wants two things from a caller:
//!
//! 1. a session cookie, set by `fc.yahoo.com` and carried in the transport's
//!    cookie jar,
//! 2. a matching crumb token from `/v1/test/getcrumb`, passed back as a
//!    query parameter on data requests.
//!
//! Only the crumb is cached here; the cookie never leaves the jar. An
//! operator-supplied `YAHOO_COOKIE` replaces the jar flow entirely.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, warn};
use tokio::sync::Mutex;

use crate::http_client::{HttpAuth, HttpClient, HttpRequest};
use crate::provider::ProviderError;

const COOKIE_PRIMER_URL: &str = "https://fc.yahoo.com";
const CRUMB_ENDPOINTS: [&str; 2] = [
    "https://query1.finance.yahoo.com/v1/test/getcrumb",
    "https://query2.finance.yahoo.com/v1/test/getcrumb",
];
const REFERER: &str = "https://finance.yahoo.com/";
const CRUMB_TTL: Duration = Duration::from_secs(3600);

/// Cached crumb plus the instant it was fetched.
#[derive(Debug, Default)]
struct CrumbState {
    crumb: Option<String>,
    fetched_at: Option<Instant>,
}

impl CrumbState {
    fn fresh_crumb(&self) -> Option<&str> {
        let fetched_at = self.fetched_at?;
        if fetched_at.elapsed() < CRUMB_TTL {
            self.crumb.as_deref()
        } else {
            None
        }
    }
}

/// Cached Yahoo session state.
///
/// The lock is held across a refresh, so concurrent callers wait for one
/// handshake instead of racing duplicates.
#[derive(Debug, Default)]
pub struct SessionAuth {
    state: Mutex<CrumbState>,
}

impl SessionAuth {
    /// Current crumb, performing the handshake when the cache is cold or
    /// past its TTL.
    pub async fn crumb(
        &self,
        http_client: &Arc<dyn HttpClient>,
        cookie: &HttpAuth,
    ) -> Result<String, ProviderError> {
        let mut state = self.state.lock().await;
        if let Some(crumb) = state.fresh_crumb() {
            return Ok(crumb.to_owned());
        }

        let crumb = fetch_crumb(http_client, cookie).await?;
        state.crumb = Some(crumb.clone());
        state.fetched_at = Some(Instant::now());
        Ok(crumb)
    }

    /// Drop the cached session so the next call performs a full handshake.
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        *state = CrumbState::default();
        debug!("yahoo session invalidated");
    }
}

/// Operator-supplied session cookie, attached verbatim to requests.
pub fn env_cookie() -> Option<HttpAuth> {
    std::env::var("YAHOO_COOKIE")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(HttpAuth::Cookie)
}

async fn fetch_crumb(
    http_client: &Arc<dyn HttpClient>,
    cookie: &HttpAuth,
) -> Result<String, ProviderError> {
    // With an explicit cookie there is no jar session to prime; otherwise
    // fc.yahoo.com answers 404 but sets the session cookie on the way out.
    if matches!(cookie, HttpAuth::None) {
        let primer = HttpRequest::get(COOKIE_PRIMER_URL).with_header("referer", REFERER);
        http_client.execute(primer).await.map_err(|e| {
            ProviderError::unavailable(format!(
                "failed to fetch yahoo session cookie: {}",
                e.message()
            ))
        })?;
    }

    for endpoint in CRUMB_ENDPOINTS {
        let request = HttpRequest::get(endpoint)
            .with_header("referer", REFERER)
            .with_auth(cookie);

        let response = match http_client.execute(request).await {
            Ok(response) => response,
            Err(error) => {
                warn!("crumb fetch from {endpoint} failed: {}", error.message());
                continue;
            }
        };

        if !response.is_success() {
            debug!(
                "crumb endpoint {endpoint} returned status {}",
                response.status
            );
            continue;
        }

        let body = response.body.trim();
        if body.to_lowercase().contains("too many requests") {
            return Err(ProviderError::rate_limited(
                "yahoo rate limited while fetching crumb",
            ));
        }

        if is_plausible_crumb(body) {
            debug!("obtained yahoo crumb from {endpoint}");
            return Ok(body.to_owned());
        }
    }

    Err(ProviderError::unavailable(
        "failed to fetch yahoo crumb from all endpoints",
    ))
}

/// A real crumb is a short opaque token; anything HTML-shaped, padded, or
/// oversized is an error page in disguise.
fn is_plausible_crumb(body: &str) -> bool {
    !body.is_empty()
        && body.len() < 100
        && !body.contains(' ')
        && !body.contains("<html")
        && !body.contains("<!DOCTYPE")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_opaque_tokens() {
        assert!(is_plausible_crumb("Ku0crumb.value"));
        assert!(is_plausible_crumb("a1b2c3"));
    }

    #[test]
    fn rejects_error_pages_and_padding() {
        assert!(!is_plausible_crumb(""));
        assert!(!is_plausible_crumb("<html><body>blocked</body></html>"));
        assert!(!is_plausible_crumb("<!DOCTYPE html>"));
        assert!(!is_plausible_crumb("not a crumb"));
        assert!(!is_plausible_crumb(&"x".repeat(200)));
    }
}
