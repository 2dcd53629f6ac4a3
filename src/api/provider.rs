use std::fmt;

use async_trait::async_trait;

use crate::core::country::{Country, CountryDetail};

/// Errors that can occur while fetching country data.
/// Every failure is caught where the fetch happens and mapped to a message by the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The service answered with its `{"status": 404}` sentinel.
    NotFound,
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// Non-success HTTP status without the not-found sentinel.
    Api { status: u16, message: String },
    /// The body was not one of the shapes we understand.
    Parse(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "not found"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait CountryProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches every country with the list projection, in service order.
    async fn load_countries(&self) -> Result<Vec<Country>, FetchError>;

    /// Fetches one country by exact common name.
    ///
    /// `Ok(None)` means the service answered but had nothing to show.
    /// When several records come back only the first is used.
    async fn load_country_detail(&self, name: &str) -> Result<Option<CountryDetail>, FetchError>;
}
