use std::fmt::Display;
use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use tracing::log;

#[derive(Debug)]
pub enum FetchError {
    Network(reqwest::Error, String),
    Status(StatusCode, String),
    Body(reqwest::Error, String),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            FetchError::Status(status, url) => write!(f, "Status {status} for {url}"),
            FetchError::Body(e, url) => write!(f, "Could not read body for {url}: {e}"),
        }
    }
}

impl std::error::Error for FetchError {}

pub const USER_AGENT: &str = "nfl-points-rs/0.1";

#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    timeout: Duration,
}

impl RestClient {
    pub fn new(timeout: Duration) -> reqwest::Result<RestClient> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(RestClient { client, timeout })
    }

    /// Single GET, no retries. Anything but a 2xx is an error.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let before = Instant::now();
        let res = self.client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await;
        match &res {
            Ok(rsp) => log::info!("[REST] Call {url} {} {:.2?}", rsp.status(), before.elapsed()),
            Err(_) => log::info!("[REST] Call {url} failed {:.2?}", before.elapsed()),
        }
        let rsp = res.map_err(|e| FetchError::Network(e, url.to_owned()))?;

        let status = rsp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status, url.to_owned()));
        }
        rsp.text().await.map_err(|e| FetchError::Body(e, url.to_owned()))
    }
}
