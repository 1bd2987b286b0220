use crate::core::enums::{PropertyType, PropertyValueFormat};
use crate::core::shape::PredefinedType;
use crate::error::ModelError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Property names the diagram layer keys on.
///
/// Shape property maps are keyed by these names; anything else is a custom
/// property defined by the project's item type.
pub mod property_names {
    pub const CLIENT_TYPE: &str = "clientType";
    pub const LABEL: &str = "label";
    pub const X: &str = "x";
    pub const Y: &str = "y";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const PERSONA: &str = "persona";
    pub const DESCRIPTION: &str = "description";
    pub const ASSOCIATED_ARTIFACT: &str = "associatedArtifact";
}

/// A named, typed attribute attached to a process or shape.
///
/// The value stays opaque on the wire; [`PropertyValueInfo::decode`]
/// interprets it according to the declared [`PropertyType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValueInfo {
    pub property_name: String,
    pub type_predefined: PredefinedType,
    pub type_id: i32,
    #[serde(default)]
    pub value: Value,
}

impl PropertyValueInfo {
    pub fn new(
        name: impl Into<String>,
        type_predefined: PredefinedType,
        type_id: i32,
        value: Value,
    ) -> Self {
        Self {
            property_name: name.into(),
            type_predefined,
            type_id,
            value,
        }
    }

    /// Interpret the opaque value according to the declared property type.
    /// `format` governs how date-typed values were encoded on the wire.
    pub fn decode(
        &self,
        property_type: PropertyType,
        format: PropertyValueFormat,
    ) -> Result<PropertyValue, ModelError> {
        match property_type {
            PropertyType::PlainText => Ok(PropertyValue::PlainText(self.expect_string()?)),
            PropertyType::RichText => Ok(PropertyValue::RichText(self.expect_string()?)),
            PropertyType::Number => {
                let n = self.value.as_f64().ok_or_else(|| self.type_mismatch("number"))?;
                Ok(PropertyValue::Number(n))
            }
            PropertyType::Date => self.decode_date(format),
            PropertyType::Choice => {
                let ids = serde_json::from_value(self.value.clone())
                    .map_err(|_| self.type_mismatch("array of choice value ids"))?;
                Ok(PropertyValue::Choice(ids))
            }
            PropertyType::User => {
                let users = serde_json::from_value(self.value.clone())
                    .map_err(|_| self.type_mismatch("array of user references"))?;
                Ok(PropertyValue::User(users))
            }
        }
    }

    fn decode_date(&self, format: PropertyValueFormat) -> Result<PropertyValue, ModelError> {
        let raw = self.expect_string()?;
        match format {
            PropertyValueFormat::Date => raw
                .parse::<NaiveDate>()
                .map(PropertyValue::Date)
                .map_err(|_| ModelError::PropertyValueFormat {
                    value: raw,
                    format: "date",
                }),
            PropertyValueFormat::DateTimeUtc => raw
                .parse::<DateTime<Utc>>()
                .map(PropertyValue::DateTimeUtc)
                .map_err(|_| ModelError::PropertyValueFormat {
                    value: raw,
                    format: "UTC date-time",
                }),
            PropertyValueFormat::Text | PropertyValueFormat::Html => {
                Err(ModelError::PropertyValueFormat {
                    value: raw,
                    format: "date",
                })
            }
        }
    }

    fn expect_string(&self) -> Result<String, ModelError> {
        self.value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.type_mismatch("string"))
    }

    fn type_mismatch(&self, expected: &'static str) -> ModelError {
        ModelError::PropertyValueType {
            name: self.property_name.clone(),
            expected,
            found: json_kind(&self.value),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A decoded property value, typed per [`PropertyType`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    PlainText(String),
    RichText(String),
    Number(f64),
    Date(NaiveDate),
    DateTimeUtc(DateTime<Utc>),
    /// Ids of the selected choice values.
    Choice(Vec<i64>),
    User(Vec<UserReference>),
}

/// A user or group referenced by a user-typed property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReference {
    pub id: i64,
    pub display_name: String,
    #[serde(default)]
    pub is_group: bool,
}
