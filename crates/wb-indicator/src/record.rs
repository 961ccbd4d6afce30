// File: crates/wb-indicator/src/record.rs
// Summary: Indicator record model as returned by the World Bank API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A JSON scalar the API uses interchangeably as string or number
/// (`"2015"` vs `2015`, `"0"` vs `0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
    Bool(bool),
}

impl fmt::Display for Scalar {
    /// Numbers print as they appeared in the JSON; strings verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// `{"id": "WLD", "value": "World"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRef {
    pub id: String,
    pub value: String,
}

/// One observation of the indicator. Fields the projection does not use are
/// kept in `extra` so a record serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    pub country: CountryRef,
    pub date: Scalar,
    /// The key must be present; only its value may be null.
    #[serde(deserialize_with = "required_nullable")]
    pub value: Option<Scalar>,
    pub decimal: Scalar,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn required_nullable<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Scalar>::deserialize(deserializer)
}

/// Pagination header, the first element of every API response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub page: Option<u64>,
    pub pages: Option<u64>,
    pub per_page: Option<u64>,
    pub total: Option<u64>,
}

impl PageMeta {
    /// Read the header leniently: the API sends these as numbers or numeric strings.
    pub fn from_value(v: &serde_json::Value) -> Self {
        let field = |key: &str| match v.get(key) {
            Some(serde_json::Value::Number(n)) => n.as_u64(),
            Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };
        Self {
            page: field("page"),
            pages: field("pages"),
            per_page: field("per_page"),
            total: field("total"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_strings_and_numbers() {
        let r: IndicatorRecord = serde_json::from_value(json!({
            "indicator": {"id": "SH.STA.ACSN", "value": "Improved sanitation facilities"},
            "country": {"id": "WLD", "value": "World"},
            "date": "2015",
            "value": 67.5,
            "decimal": 0
        }))
        .unwrap();
        assert_eq!(r.date.to_string(), "2015");
        assert_eq!(r.value.as_ref().map(|v| v.to_string()).as_deref(), Some("67.5"));
        assert_eq!(r.decimal.to_string(), "0");
        assert!(r.extra.contains_key("indicator"));
    }

    #[test]
    fn null_value_is_allowed_but_missing_value_is_not() {
        let ok: IndicatorRecord = serde_json::from_value(json!({
            "country": {"id": "WLD", "value": "World"},
            "date": "1960", "value": null, "decimal": "0"
        }))
        .unwrap();
        assert_eq!(ok.value, None);

        let missing = serde_json::from_value::<IndicatorRecord>(json!({
            "country": {"id": "WLD", "value": "World"},
            "date": "1960", "decimal": "0"
        }));
        assert!(missing.is_err());
    }

    #[test]
    fn round_trips_extra_fields() {
        let raw = json!({
            "country": {"id": "WLD", "value": "World"},
            "countryiso3code": "WLD",
            "date": "2014", "value": "77", "decimal": "0", "unit": ""
        });
        let r: IndicatorRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&r).unwrap(), raw);
    }

    #[test]
    fn page_meta_is_lenient() {
        let m = PageMeta::from_value(&json!({"page": 1, "pages": "17", "per_page": "1000", "total": 16492}));
        assert_eq!(m, PageMeta { page: Some(1), pages: Some(17), per_page: Some(1000), total: Some(16492) });
        assert_eq!(PageMeta::from_value(&json!(null)), PageMeta::default());
    }
}
