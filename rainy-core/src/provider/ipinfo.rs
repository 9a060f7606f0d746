use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::Location;

use super::{LocationProvider, fetch_body, http_client};

const DEFAULT_URL: &str = "https://ipinfo.io/json";

/// Geolocates the caller's public IP address.
#[derive(Debug, Clone)]
pub struct IpInfoLocator {
    url: String,
    http: Client,
}

impl IpInfoLocator {
    pub fn new() -> Result<Self> {
        Self::with_url(DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            url: url.into(),
            http: http_client()?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    city: String,
    /// "lat,lon"
    loc: String,
}

#[async_trait]
impl LocationProvider for IpInfoLocator {
    async fn locate(&self) -> Result<Location> {
        debug!(url = %self.url, "geolocating");
        let body = fetch_body(self.http.get(&self.url), "ipinfo.io").await?;

        let parsed: IpInfoResponse =
            serde_json::from_str(&body).context("Failed to parse ipinfo.io JSON")?;
        let (latitude, longitude) = parse_loc(&parsed.loc)?;

        let location = Location {
            city: parsed.city,
            latitude,
            longitude,
        };
        debug!(?location, "located");

        Ok(location)
    }
}

fn parse_loc(loc: &str) -> Result<(f64, f64)> {
    let (lat, lon) = loc
        .split_once(',')
        .ok_or_else(|| anyhow!("Unexpected ipinfo.io location '{loc}', expected 'lat,lon'"))?;

    let parse = |part: &str| -> Result<f64> {
        part.trim()
            .parse::<f64>()
            .map(round2)
            .with_context(|| format!("Invalid coordinate '{part}' in ipinfo.io location"))
    };

    Ok((parse(lat)?, parse(lon)?))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[test]
    fn coordinates_are_rounded_to_two_places() {
        let (lat, lon) = parse_loc("52.5244,13.4105").expect("valid loc");
        assert!((lat - 52.52).abs() < 1e-9);
        assert!((lon - 13.41).abs() < 1e-9);
    }

    #[test]
    fn malformed_loc_is_an_error() {
        assert!(parse_loc("52.5").is_err());
        assert!(parse_loc("north,13.4").is_err());
    }

    #[tokio::test]
    async fn locate_reads_city_and_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"ip":"203.0.113.7","city":"Berlin","region":"Berlin","country":"DE","loc":"52.5244,13.4105"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let locator = IpInfoLocator::with_url(format!("{}/json", server.uri())).expect("client");
        let location = locator.locate().await.expect("locate");

        assert_eq!(location.city, "Berlin");
        assert!((location.latitude - 52.52).abs() < 1e-9);
        assert!((location.longitude - 13.41).abs() < 1e-9);
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let locator = IpInfoLocator::with_url(format!("{}/json", server.uri())).expect("client");
        let err = locator.locate().await.unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("ipinfo.io request failed with status 429"));
        assert!(msg.contains("rate limited"));
    }
}
