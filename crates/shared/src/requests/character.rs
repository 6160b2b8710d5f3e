use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tabletophub_domain::{SheetValue, SheetValues};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CharacterRequest {
    /// Attribute scheme and wizard schema for a setting (default when omitted).
    DescribeScheme {
        #[serde(default)]
        setting: Option<String>,
    },
    ListCharacters {
        #[serde(default)]
        setting: Option<String>,
    },
    GetCharacter {
        character_id: String,
    },
    CreateCharacter {
        data: CreateCharacterData,
    },
    DeleteCharacter {
        character_id: String,
    },
}

/// Raw wizard output as sent by the client.
///
/// Everything except `setting` is kept as loose JSON; the engine validates it against
/// the setting's full schema before anything is stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCharacterData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// A field carried a JSON array or object where only scalars are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Field '{0}' must be a single value")]
pub struct NonScalarField(pub String);

impl CreateCharacterData {
    pub fn with_field(
        mut self,
        field: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Converts the loose JSON fields into wizard values.
    ///
    /// Numbers that fit `i32` become integers, other numbers stay floats so the
    /// validator can report them as the wrong type.
    pub fn sheet_values(&self) -> Result<SheetValues, NonScalarField> {
        self.fields
            .iter()
            .map(|(field, value)| {
                let converted = match value {
                    serde_json::Value::Null => SheetValue::Null,
                    serde_json::Value::Bool(b) => SheetValue::Boolean(*b),
                    serde_json::Value::String(s) => SheetValue::String(s.clone()),
                    serde_json::Value::Number(n) => match n.as_i64().map(i32::try_from) {
                        Some(Ok(int)) => SheetValue::Integer(int),
                        _ => SheetValue::Float(n.as_f64().unwrap_or(f64::NAN)),
                    },
                    serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                        return Err(NonScalarField(field.clone()))
                    }
                };
                Ok((field.clone(), converted))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_parses_flat_fields() {
        let json = r#"{
            "type": "CreateCharacter",
            "data": {
                "setting": "Planet of the Song",
                "name": "Asha",
                "katra": 12,
                "imperius": 8.0,
                "notes": null
            }
        }"#;

        let request: CharacterRequest = serde_json::from_str(json).unwrap();
        let CharacterRequest::CreateCharacter { data } = request else {
            panic!("expected CreateCharacter");
        };
        assert_eq!(data.setting.as_deref(), Some("Planet of the Song"));

        let values = data.sheet_values().unwrap();
        assert_eq!(values.get("name"), Some(&SheetValue::from("Asha")));
        assert_eq!(values.get("katra"), Some(&SheetValue::Integer(12)));
        assert_eq!(values.get("imperius"), Some(&SheetValue::Float(8.0)));
        assert_eq!(values.get("notes"), Some(&SheetValue::Null));
        assert!(!values.contains_key("setting"));
    }

    #[test]
    fn nested_values_are_rejected() {
        let data = CreateCharacterData::default().with_field("katra", serde_json::json!([1, 2]));
        let err = data.sheet_values().unwrap_err();
        assert_eq!(err, NonScalarField("katra".into()));
        assert_eq!(err.to_string(), "Field 'katra' must be a single value");
    }

    #[test]
    fn huge_numbers_are_not_truncated() {
        let data = CreateCharacterData::default().with_field("katra", 10_000_000_000_i64);
        let values = data.sheet_values().unwrap();
        assert!(matches!(values.get("katra"), Some(SheetValue::Float(_))));
    }

    #[test]
    fn setting_is_optional() {
        let request: CharacterRequest =
            serde_json::from_str(r#"{"type":"DescribeScheme"}"#).unwrap();
        assert!(matches!(
            request,
            CharacterRequest::DescribeScheme { setting: None }
        ));
    }
}
