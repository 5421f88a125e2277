use std::time::Duration;

use reqwest::header::ACCEPT;

use crate::error::{LangRankError, Result};

const REQUEST_TIMEOUT_SECS: u64 = 20;
const USER_AGENT: &str = "github-lang-rank";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Perform a GET request and return the response body.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx status.
    fn get(&self, url: &str) -> Result<String>;
}

/// Production HTTP client using reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
    token: Option<String>,
}

#[cfg(not(tarpaulin_include))]
impl ReqwestClient {
    /// Build a client that sends `token` as a bearer credential when present.
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(token: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LangRankError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, token })
    }
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String> {
        let mut request = self.client.get(url).header(ACCEPT, GITHUB_MEDIA_TYPE);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| {
            let message = if e.is_timeout() {
                format!("timed out after {REQUEST_TIMEOUT_SECS}s")
            } else if e.is_connect() {
                "could not connect".to_string()
            } else {
                e.to_string()
            };
            LangRankError::Http {
                url: url.to_string(),
                message,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LangRankError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body: body.trim().to_string(),
            });
        }

        response.text().map_err(|e| LangRankError::Http {
            url: url.to_string(),
            message: format!("failed to read response body: {e}"),
        })
    }
}
