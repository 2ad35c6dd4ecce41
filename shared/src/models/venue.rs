//! Venue Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A single value stored in a venue field.
///
/// The venues API serializes database rows without a schema, so a field may
/// come back as any JSON scalar. `null` and absent keys are represented by
/// `Option::None` on the owning field, never by a variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(Number),
    Text(String),
    /// Arrays and objects
    Other(Value),
}

impl FieldValue {
    /// Convert a raw JSON value, mapping `null` to `None`
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Bool(b)),
            Value::Number(n) => Some(Self::Number(n)),
            Value::String(s) => Some(Self::Text(s)),
            other => Some(Self::Other(other)),
        }
    }

    /// Truthiness as the page script sees it: `false`, `0`, `NaN` and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Self::Text(s) => !s.is_empty(),
            Self::Other(_) => true,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for FieldValue {
    /// Non-finite floats have no JSON form and become `Other(null)`
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(Self::Number)
            .unwrap_or(Self::Other(Value::Null))
    }
}

/// Venue entity as returned by `GET /api/venues`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_coordinate: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_coordinate: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<FieldValue>,
    /// ISO-parsable timestamp of the next scheduled event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_event_date: Option<FieldValue>,
    /// Columns the API returns that have no dedicated field (`id`, `last_updated`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Venue {
    /// Look up a field by its API key.
    ///
    /// Returns `None` when the key is absent or `null`.
    pub fn get(&self, key: &str) -> Option<FieldValue> {
        let field = match key {
            "name" => &self.name,
            "address" => &self.address,
            "category" => &self.category,
            "phone_number" => &self.phone_number,
            "rating" => &self.rating,
            "x_coordinate" => &self.x_coordinate,
            "y_coordinate" => &self.y_coordinate,
            "website_url" => &self.website_url,
            "instagram" => &self.instagram,
            "facebook" => &self.facebook,
            "upcoming_event_date" => &self.upcoming_event_date,
            other => {
                return self
                    .extra
                    .get(other)
                    .cloned()
                    .and_then(FieldValue::from_json);
            }
        };
        field.clone()
    }
}
