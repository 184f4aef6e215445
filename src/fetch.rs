//! Page Fetching Module
//!
//! Plain blocking HTTP GET with a browser-like User-Agent. One client with a
//! cookie store is reused for the whole run so connections and cookies carry
//! over between pages. No retries and no custom timeouts.

use crate::error::FetchError;
use reqwest::blocking::Client;
use tracing::debug;

/// Source of raw page markup.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .cookie_store(true)
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}
