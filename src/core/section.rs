//! # Display Sections
//!
//! Maps a `CountryDetail` onto the fixed, ordered label/value rows of the
//! detail screen. Sections are rebuilt on every draw and never stored.

use crate::core::country::CountryDetail;

/// One label/value row on the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub data: String,
}

impl Section {
    fn new(title: &'static str, data: impl Into<String>) -> Self {
        Self {
            title,
            data: data.into(),
        }
    }
}

/// Builds the rows in display order: name, capital, population, area,
/// continents, languages.
pub fn detail_sections(country: &CountryDetail) -> Vec<Section> {
    vec![
        Section::new("name", country.name.as_str()),
        Section::new("capital", country.capital.clone().unwrap_or_default()),
        Section::new("population", country.population.to_string()),
        Section::new("area", format_area(country.area_sq_km)),
        Section::new("continents", country.continent.clone().unwrap_or_default()),
        Section::new("languages", country.languages.join(", ")),
    ]
}

/// `377975.0` renders as `"377975 km2"`, `0.44` as `"0.44 km2"`.
pub fn format_area(area_sq_km: f64) -> String {
    format!("{area_sq_km} km2")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn japan() -> CountryDetail {
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

    #[test]
    fn test_sections_are_in_display_order() {
        let titles: Vec<&str> = detail_sections(&japan()).iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["name", "capital", "population", "area", "continents", "languages"]
        );
    }

    #[test]
    fn test_sections_for_japan() {
        let data: Vec<String> = detail_sections(&japan()).into_iter().map(|s| s.data).collect();
        assert_eq!(
            data,
            vec!["Japan", "Tokyo", "125000000", "377975 km2", "Asia", "Japanese"]
        );
    }

    #[test]
    fn test_languages_are_joined_in_order() {
        let mut swiss = japan();
        swiss.languages = vec![
            "French".to_string(),
            "Swiss German".to_string(),
            "Italian".to_string(),
            "Romansh".to_string(),
        ];
        let sections = detail_sections(&swiss);
        assert_eq!(sections[5].data, "French, Swiss German, Italian, Romansh");
    }

    #[test]
    fn test_missing_capital_and_continent_render_empty() {
        let mut nowhere = japan();
        nowhere.capital = None;
        nowhere.continent = None;
        nowhere.languages.clear();
        let sections = detail_sections(&nowhere);
        assert_eq!(sections[1].data, "");
        assert_eq!(sections[4].data, "");
        assert_eq!(sections[5].data, "");
    }

    #[test]
    fn test_format_area_fractional() {
        assert_eq!(format_area(0.44), "0.44 km2");
        assert_eq!(format_area(9_984_670.0), "9984670 km2");
    }
}
