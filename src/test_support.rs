//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::api::{CountryProvider, FetchError};
use crate::core::country::{Country, CountryDetail};
use crate::core::state::App;
use crate::core::theme::Theme;

/// A provider with canned answers for tests that don't need real API calls.
pub struct StubProvider {
    pub countries: Result<Vec<Country>, FetchError>,
    pub detail: Result<Option<CountryDetail>, FetchError>,
}

impl Default for StubProvider {
    fn default() -> Self {
        Self {
            countries: Ok(sample_countries()),
            detail: Ok(Some(japan())),
        }
    }
}

#[async_trait]
impl CountryProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn load_countries(&self) -> Result<Vec<Country>, FetchError> {
        self.countries.clone()
    }

    async fn load_country_detail(&self, _name: &str) -> Result<Option<CountryDetail>, FetchError> {
        self.detail.clone()
    }
}

/// France and Germany, in that order.
pub fn sample_countries() -> Vec<Country> {
    vec![
        Country::new("France", "f.png", Some("Paris")),
        Country::new("Germany", "g.png", Some("Berlin")),
    ]
}

pub fn japan() -> CountryDetail {
    CountryDetail {
        name: "Japan".to_string(),
        flag_url: "j.png".to_string(),
        capital: Some("Tokyo".to_string()),
        population: 125_000_000,
        area_sq_km: 377_975.0,
        continent: Some("Asia".to_string()),
        languages: vec!["Japanese".to_string()],
    }
}

/// Creates a test App with a StubProvider.
pub fn test_app() -> App {
    App::new(Arc::new(StubProvider::default()), Theme::Light)
}
