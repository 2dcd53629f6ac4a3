//! REST Countries wire types.
//!
//! These mirror the JSON the service sends for our field projections and are
//! converted into the `core::country` types right after decoding. Every field
//! the service may omit gets a default so a sparse record still decodes.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::country::{Country, CountryDetail, first_of};

/// Fields requested by the list screen.
pub const LIST_FIELDS: &str = "name,flags,capital";

/// Fields requested by the detail screen.
pub const DETAIL_FIELDS: &str =
    "name,area,flags,capital,region,languages,population,code,continents,currencies";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CountryName {
    pub common: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
}

/// `GET /v3.1/all?fields=name,flags,capital` element.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub capital: Vec<String>,
}

/// `GET /v3.1/name/{name}?fullText=true` element.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CountryDetailRecord {
    pub name: CountryName,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub continents: Vec<String>,
    /// ISO 639-3 code → language name, in service order.
    #[serde(default)]
    pub languages: Map<String, Value>,
}

/// Every body shape the service answers with.
///
/// Arrays are tried first; an object is only ever the error sentinel.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Records(Vec<T>),
    Status(StatusBody),
    Null,
}

/// `{"status": 404, "message": "Not Found"}`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StatusBody {
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<CountryRecord> for Country {
    fn from(record: CountryRecord) -> Self {
        Country {
            name: record.name.common,
            flag_url: record.flags.png,
            capital: first_of(record.capital),
        }
    }
}

impl From<CountryDetailRecord> for CountryDetail {
    fn from(record: CountryDetailRecord) -> Self {
        let languages = record
            .languages
            .into_iter()
            .filter_map(|(_, value)| match value {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect();

        CountryDetail {
            name: record.name.common,
            flag_url: record.flags.png,
            capital: first_of(record.capital),
            population: record.population,
            area_sq_km: record.area,
            continent: first_of(record.continents),
            languages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_record_decodes_and_converts() {
        let json = r#"{"name":{"common":"France","official":"French Republic"},"flags":{"png":"f.png","svg":"f.svg"},"capital":["Paris"]}"#;
        let record: CountryRecord = serde_json::from_str(json).unwrap();
        let country = Country::from(record);
        assert_eq!(country, Country::new("France", "f.png", Some("Paris")));
    }

    #[test]
    fn test_missing_capital_is_tolerated() {
        let json = r#"{"name":{"common":"Antarctica"},"flags":{"png":"aq.png"}}"#;
        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert!(Country::from(record).capital.is_none());

        let json = r#"{"name":{"common":"Macau"},"flags":{"png":"mo.png"},"capital":[]}"#;
        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert!(Country::from(record).capital.is_none());
    }

    #[test]
    fn test_detail_record_converts_japan() {
        let json = r#"{
            "name": {"common": "Japan"},
            "capital": ["Tokyo"],
            "population": 125000000,
            "area": 377975,
            "continents": ["Asia"],
            "languages": {"jpn": "Japanese"},
            "flags": {"png": "j.png"}
        }"#;
        let record: CountryDetailRecord = serde_json::from_str(json).unwrap();
        let detail = CountryDetail::from(record);
        assert_eq!(detail.name, "Japan");
        assert_eq!(detail.capital.as_deref(), Some("Tokyo"));
        assert_eq!(detail.population, 125_000_000);
        assert_eq!(detail.area_sq_km, 377_975.0);
        assert_eq!(detail.continent.as_deref(), Some("Asia"));
        assert_eq!(detail.languages, vec!["Japanese"]);
        assert_eq!(detail.flag_url, "j.png");
    }

    #[test]
    fn test_languages_keep_service_order() {
        let json = r#"{"name":{"common":"Switzerland"},"languages":{"gsw":"Swiss German","fra":"French","ita":"Italian","roh":"Romansh"}}"#;
        let record: CountryDetailRecord = serde_json::from_str(json).unwrap();
        let detail = CountryDetail::from(record);
        assert_eq!(
            detail.languages,
            vec!["Swiss German", "French", "Italian", "Romansh"]
        );
    }

    #[test]
    fn test_first_continent_wins() {
        let json = r#"{"name":{"common":"Russia"},"continents":["Europe","Asia"]}"#;
        let record: CountryDetailRecord = serde_json::from_str(json).unwrap();
        assert_eq!(CountryDetail::from(record).continent.as_deref(), Some("Europe"));
    }

    #[test]
    fn test_api_response_shapes() {
        let records: ApiResponse<CountryRecord> =
            serde_json::from_str(r#"[{"name":{"common":"Chad"}}]"#).unwrap();
        assert!(matches!(records, ApiResponse::Records(ref r) if r.len() == 1));

        let status: ApiResponse<CountryRecord> =
            serde_json::from_str(r#"{"status":404,"message":"Not Found"}"#).unwrap();
        assert!(matches!(status, ApiResponse::Status(StatusBody { status: 404, .. })));

        let null: ApiResponse<CountryRecord> = serde_json::from_str("null").unwrap();
        assert!(matches!(null, ApiResponse::Null));
    }

    #[test]
    fn test_api_response_rejects_garbage() {
        assert!(serde_json::from_str::<ApiResponse<CountryRecord>>(r#""hello""#).is_err());
        assert!(serde_json::from_str::<ApiResponse<CountryRecord>>(r#"[{"flags":{}}]"#).is_err());
    }
}
