//! REST Countries provider (`https://restcountries.com`).
//!
//! Two endpoints, both GET, both JSON:
//!
//! - `/v3.1/all?fields=name,flags,capital`
//! - `/v3.1/name/{name}?fullText=true&fields=...`
//!
//! The service signals "no match" by answering with `{"status": 404}` rather
//! than an empty array, so the body is inspected before the HTTP status.
//! One round trip per call. No retries, no timeout beyond reqwest's default.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::api::types::{
    ApiResponse, CountryDetailRecord, CountryRecord, DETAIL_FIELDS, LIST_FIELDS,
};
use crate::api::{CountryProvider, FetchError};
use crate::core::country::{Country, CountryDetail};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";

pub struct RestCountriesProvider {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesProvider {
    /// Creates a new provider.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the public service)
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/v3.1/all?fields=...`
    fn all_url(&self) -> Result<Url, FetchError> {
        let mut url = self.endpoint(&["v3.1", "all"])?;
        url.query_pairs_mut().append_pair("fields", LIST_FIELDS);
        Ok(url)
    }

    /// `{base}/v3.1/name/{name}?fullText=true&fields=...`, with `name` percent-encoded.
    fn name_url(&self, name: &str) -> Result<Url, FetchError> {
        let mut url = self.endpoint(&["v3.1", "name", name])?;
        url.query_pairs_mut()
            .append_pair("fullText", "true")
            .append_pair("fields", DETAIL_FIELDS);
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::Network(format!("invalid base URL {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Network(format!("base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a GET and decodes the body into one of the known response shapes.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<ApiResponse<T>, FetchError> {
        info!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("REST Countries response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("REST Countries response body: {} bytes", body.len());

        match serde_json::from_str::<ApiResponse<T>>(&body) {
            Ok(ApiResponse::Status(s)) if s.status == 404 => {
                info!("Service reported not found: {:?}", s.message);
                Err(FetchError::NotFound)
            }
            Ok(_) if !status.is_success() => {
                warn!("REST Countries API error: {} - {}", status, body);
                Err(FetchError::Api {
                    status: status.as_u16(),
                    message: body,
                })
            }
            Ok(ApiResponse::Status(s)) => {
                warn!("Unexpected status body with HTTP {}: {:?}", status, s);
                Err(FetchError::Api {
                    status: s.status,
                    message: s.message.unwrap_or_default(),
                })
            }
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => {
                warn!("REST Countries API error: {} - {}", status, body);
                Err(FetchError::Api {
                    status: status.as_u16(),
                    message: body,
                })
            }
            Err(e) => {
                warn!("Failed to decode response body: {}", e);
                Err(FetchError::Parse(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl CountryProvider for RestCountriesProvider {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn load_countries(&self) -> Result<Vec<Country>, FetchError> {
        let url = self.all_url()?;
        let countries: Vec<Country> = match self.get::<CountryRecord>(url).await? {
            ApiResponse::Records(records) => records.into_iter().map(Country::from).collect(),
            ApiResponse::Null | ApiResponse::Status(_) => Vec::new(),
        };
        info!("Loaded {} countries", countries.len());
        Ok(countries)
    }

    async fn load_country_detail(&self, name: &str) -> Result<Option<CountryDetail>, FetchError> {
        let url = self.name_url(name)?;
        let detail = match self.get::<CountryDetailRecord>(url).await? {
            ApiResponse::Records(records) => {
                if records.len() > 1 {
                    debug!(
                        "{} records matched '{}', using the first",
                        records.len(),
                        name
                    );
                }
                records.into_iter().next().map(CountryDetail::from)
            }
            ApiResponse::Null | ApiResponse::Status(_) => None,
        };
        info!("Loaded detail for '{}': found={}", name, detail.is_some());
        Ok(detail)
    }
}
