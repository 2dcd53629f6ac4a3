//! # Country Model
//!
//! The two shapes a country takes in Atlas. Both are built from whatever the
//! remote service returned and never change afterwards.
//!
//! ```text
//! Country            (list screen)     name, flag_url, capital
//! CountryDetail      (detail screen)   name, flag_url, capital, population,
//!                                      area_sq_km, continent, languages
//! ```
//!
//! The service returns capitals and continents as sequences. We keep element 0
//! and drop the rest. A missing or empty sequence becomes `None`.

/// A country as shown in the list: just enough for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    /// Common name. Also the identity used to navigate to the detail screen.
    pub name: String,
    pub flag_url: String,
    pub capital: Option<String>,
}

impl Country {
    pub fn new(name: impl Into<String>, flag_url: impl Into<String>, capital: Option<&str>) -> Self {
        Self {
            name: name.into(),
            flag_url: flag_url.into(),
            capital: capital.map(str::to_string),
        }
    }
}

/// Extended record fetched independently by the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDetail {
    pub name: String,
    pub flag_url: String,
    pub capital: Option<String>,
    pub population: u64,
    pub area_sq_km: f64,
    pub continent: Option<String>,
    /// Language names in the order the service lists them.
    pub languages: Vec<String>,
}

/// Picks element 0 of a sequence. Used for capitals, continents and search hits.
pub fn first_of(values: Vec<String>) -> Option<String> {
    values.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_takes_index_zero() {
        let values = vec!["Pretoria".to_string(), "Bloemfontein".to_string(), "Cape Town".to_string()];
        assert_eq!(first_of(values), Some("Pretoria".to_string()));
    }

    #[test]
    fn test_first_of_empty_is_none() {
        assert_eq!(first_of(Vec::new()), None);
    }

    #[test]
    fn test_country_new() {
        let country = Country::new("France", "f.png", Some("Paris"));
        assert_eq!(country.name, "France");
        assert_eq!(country.flag_url, "f.png");
        assert_eq!(country.capital.as_deref(), Some("Paris"));

        let antarctica = Country::new("Antarctica", "aq.png", None);
        assert!(antarctica.capital.is_none());
    }
}
