use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A raw, not-yet-validated field value collected by the creation wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SheetValue {
    Integer(i32),
    Float(f64),
    Boolean(bool),
    String(String),
    Null,
}

impl SheetValue {
    /// Integer view of the value. Floats count only when they are whole and fit in `i32`.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            SheetValue::Integer(value) => Some(*value),
            SheetValue::Float(value)
                if value.is_finite()
                    && value.fract() == 0.0
                    && *value >= f64::from(i32::MIN)
                    && *value <= f64::from(i32::MAX) =>
            {
                Some(*value as i32)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SheetValue::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SheetValue::Null)
    }
}

impl From<i32> for SheetValue {
    fn from(value: i32) -> Self {
        SheetValue::Integer(value)
    }
}

impl From<&str> for SheetValue {
    fn from(value: &str) -> Self {
        SheetValue::String(value.to_string())
    }
}

impl From<String> for SheetValue {
    fn from(value: String) -> Self {
        SheetValue::String(value)
    }
}

impl<T: Into<SheetValue>> From<Option<T>> for SheetValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SheetValue::Null)
    }
}

/// Field id -> raw value, as collected across wizard steps.
pub type SheetValues = BTreeMap<String, SheetValue>;
