pub mod provider;
pub mod rest_countries;
pub mod types;

pub use provider::{CountryProvider, FetchError};
pub use rest_countries::RestCountriesProvider;
