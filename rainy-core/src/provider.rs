use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::{fmt::Debug, time::Duration};

use crate::model::{Location, WeatherReport, WeatherRequest};

pub mod ipinfo;
pub mod open_meteo;

pub use ipinfo::IpInfoLocator;
pub use open_meteo::OpenMeteoProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves where the report is for.
#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    async fn locate(&self) -> Result<Location>;
}

/// Fetches current conditions for a location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, request: &WeatherRequest) -> Result<WeatherReport>;
}

/// A location given up front, e.g. on the command line.
#[derive(Debug, Clone)]
pub struct FixedLocation(pub Location);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn locate(&self) -> Result<Location> {
        Ok(self.0.clone())
    }
}

fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

/// Send a request and return the body of a successful response.
async fn fetch_body(request: RequestBuilder, service: &str) -> Result<String> {
    let res = request
        .send()
        .await
        .with_context(|| format!("Failed to send request to {service}"))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .with_context(|| format!("Failed to read {service} response body"))?;

    if !status.is_success() {
        return Err(anyhow!(
            "{service} request failed with status {}: {}",
            status,
            truncate_body(&body),
        ));
    }

    Ok(body)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
