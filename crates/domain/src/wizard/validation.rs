//! Step and full-schema validation.
//!
//! Every failing field gets its own [`FieldError`] with a machine-readable reason.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::step::{CharacterSchema, CrossFieldRule, FieldKind, FieldRule, StepSchema, ValueType};
use crate::attributes::AttributeKey;
use crate::ids::CampaignId;
use crate::types::{SheetValue, SheetValues};

/// Why a field failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ValidationReason {
    /// Missing, null or blank
    Required,
    WrongType { expected: ValueType },
    OutOfRange { min: i32, max: i32 },
    TooLong { max: usize },
    /// The pair does not add up; keyed to the second member
    SumMismatch { partner: AttributeKey, total: i32 },
    /// The derived alignment value is not the inverse of its driver
    NotInverse { driver: AttributeKey },
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::Required => write!(f, "is required"),
            ValidationReason::WrongType { expected } => write!(f, "must be {}", expected),
            ValidationReason::OutOfRange { min, max } => {
                write!(f, "must be between {} and {}", min, max)
            }
            ValidationReason::TooLong { max } => {
                write!(f, "must be at most {} characters", max)
            }
            ValidationReason::SumMismatch { partner, total } => {
                write!(f, "must add up to {} with {}", total, partner)
            }
            ValidationReason::NotInverse { driver } => {
                write!(f, "must be the inverse of {}", driver)
            }
        }
    }
}

/// A single invalid field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    #[serde(flatten)]
    pub reason: ValidationReason,
    pub message: String,
}

impl FieldError {
    pub fn new(rule_label: &str, field: impl Into<String>, reason: ValidationReason) -> Self {
        let message = format!("{} {}", rule_label, reason);
        Self {
            field: field.into(),
            reason,
            message,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of validating a step or the whole schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Errors reported for one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |error| error.field == field)
    }

    fn extend(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }
}

/// Validates only the fields a step presents. Fields belonging to other steps are ignored.
pub fn validate_step(schema: &StepSchema, input: &SheetValues) -> ValidationResult {
    let mut errors = Vec::new();
    let mut integers = BTreeMap::new();

    for rule in &schema.fields {
        match check_field(rule, input.get(&rule.field)) {
            Ok(Some(Checked::Integer(value))) => {
                integers.insert(rule.field.as_str(), value);
            }
            Ok(_) => {}
            Err(reason) => errors.push(FieldError::new(&rule.label, rule.field.clone(), reason)),
        }
    }

    let label = |field: &str| {
        schema
            .field(field)
            .map(|rule| rule.label.clone())
            .unwrap_or_else(|| field.to_string())
    };

    for cross in &schema.cross_field {
        match cross {
            CrossFieldRule::OpposedSum { pair } => {
                let first = integers.get(pair.first.as_str());
                let second = integers.get(pair.second.as_str());
                if let (Some(a), Some(b)) = (first, second) {
                    if a + b != pair.total {
                        errors.push(FieldError::new(
                            &label(pair.second.as_str()),
                            pair.second.as_str(),
                            ValidationReason::SumMismatch {
                                partner: pair.first,
                                total: pair.total,
                            },
                        ));
                    }
                }
            }
            CrossFieldRule::Inverse { rule } => {
                let driver = integers.get(rule.driver.as_str());
                let derived = integers.get(rule.derived.as_str());
                if let (Some(driver_value), Some(derived_value)) = (driver, derived) {
                    if !rule.is_inverse(*driver_value, *derived_value) {
                        errors.push(FieldError::new(
                            &label(rule.derived.as_str()),
                            rule.derived.as_str(),
                            ValidationReason::NotInverse {
                                driver: rule.driver,
                            },
                        ));
                    }
                }
            }
        }
    }

    ValidationResult { errors }
}

/// Validates every step. Used again at submission regardless of per-step results.
pub fn validate_all(schema: &CharacterSchema, input: &SheetValues) -> ValidationResult {
    let mut result = ValidationResult::default();
    for step in schema.steps() {
        result.extend(validate_step(step, input));
    }
    result
}

enum Checked {
    Integer(i32),
    Other,
}

/// `Ok(None)` when an optional field is absent.
fn check_field(
    rule: &FieldRule,
    value: Option<&SheetValue>,
) -> Result<Option<Checked>, ValidationReason> {
    let value = match value {
        Some(value) if !is_blank(value) => value,
        _ if rule.required => return Err(ValidationReason::Required),
        _ => return Ok(None),
    };

    let wrong_type = || ValidationReason::WrongType {
        expected: rule.kind.value_type(),
    };

    match rule.kind {
        FieldKind::Text { max_length } => {
            let text = value.as_str().ok_or_else(wrong_type)?;
            if text.trim().chars().count() > max_length {
                return Err(ValidationReason::TooLong { max: max_length });
            }
            Ok(Some(Checked::Other))
        }
        FieldKind::Integer { min, max } => {
            let number = value.as_i32().ok_or_else(wrong_type)?;
            if !(min..=max).contains(&number) {
                return Err(ValidationReason::OutOfRange { min, max });
            }
            Ok(Some(Checked::Integer(number)))
        }
        FieldKind::Identifier => {
            let raw = value.as_str().ok_or_else(wrong_type)?;
            raw.trim()
                .parse::<CampaignId>()
                .map_err(|_| wrong_type())?;
            Ok(Some(Checked::Other))
        }
    }
}

fn is_blank(value: &SheetValue) -> bool {
    match value {
        SheetValue::Null => true,
        SheetValue::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeAssignment;
    use crate::game_settings::GameSetting;
    use crate::wizard::step::{fields, WizardStep};

    fn schema(setting: GameSetting) -> CharacterSchema {
        CharacterSchema::for_setting(setting)
    }

    fn values(entries: &[(&str, SheetValue)]) -> SheetValues {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn attribute_values(assignment: &AttributeAssignment) -> SheetValues {
        assignment
            .iter()
            .map(|(key, value)| (key.as_str().to_string(), SheetValue::Integer(value)))
            .collect()
    }

    #[test]
    fn missing_name_is_the_only_identity_failure() {
        let schema = schema(GameSetting::ConflictHorizon);
        let identity = schema.step(WizardStep::Identity).unwrap();

        let result = validate_step(identity, &SheetValues::new());

        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "name");
        assert_eq!(result.errors()[0].reason, ValidationReason::Required);
    }

    #[test]
    fn blank_and_null_count_as_missing() {
        let schema = schema(GameSetting::ConflictHorizon);
        let origin = schema.step(WizardStep::Origin).unwrap();

        let input = values(&[
            (fields::BIRTH_VECTOR, SheetValue::from("   ")),
            (fields::POINT_OF_ORIGIN, SheetValue::Null),
            (fields::FACTION, SheetValue::from("Ascendancy")),
            (fields::EDICT, SheetValue::from("Silence")),
        ]);

        let result = validate_step(origin, &input);
        let failed: Vec<_> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(failed, vec![fields::BIRTH_VECTOR, fields::POINT_OF_ORIGIN]);
        assert!(result
            .errors()
            .iter()
            .all(|e| e.reason == ValidationReason::Required));
    }

    #[test]
    fn over_long_origin_field_reports_limit() {
        let schema = schema(GameSetting::ConflictHorizon);
        let origin = schema.step(WizardStep::Origin).unwrap();

        let input = values(&[
            (fields::BIRTH_VECTOR, SheetValue::from("x".repeat(101))),
            (fields::POINT_OF_ORIGIN, SheetValue::from("Kessel Drift")),
            (fields::FACTION, SheetValue::from("Ascendancy")),
            (fields::EDICT, SheetValue::from("Silence")),
        ]);

        let result = validate_step(origin, &input);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(
            result.errors()[0].reason,
            ValidationReason::TooLong { max: 100 }
        );
    }

    #[test]
    fn wrong_types_are_reported_not_coerced() {
        let schema = schema(GameSetting::HarrowingTruth);
        let attributes = schema.step(WizardStep::Attributes).unwrap();

        let mut input =
            attribute_values(&AttributeAssignment::initialize(&GameSetting::HarrowingTruth.scheme()));
        input.insert("katra".into(), SheetValue::from("60"));
        input.insert("dominion".into(), SheetValue::Float(60.5));
        input.insert("imperius".into(), SheetValue::Float(45.0));

        let result = validate_step(attributes, &input);
        assert_eq!(result.errors().len(), 2);
        assert!(result.for_field("katra").all(|e| e.reason
            == ValidationReason::WrongType {
                expected: ValueType::Integer
            }));
        assert_eq!(result.for_field("dominion").count(), 1);
        assert_eq!(result.for_field("imperius").count(), 0);
    }

    #[test]
    fn out_of_range_independent_value() {
        let schema = schema(GameSetting::HarrowingTruth);
        let attributes = schema.step(WizardStep::Attributes).unwrap();

        let mut input =
            attribute_values(&AttributeAssignment::initialize(&GameSetting::HarrowingTruth.scheme()));
        input.insert("gnosis".into(), SheetValue::Integer(95));

        let result = validate_step(attributes, &input);
        assert_eq!(
            result.errors(),
            &[FieldError::new(
                "Sanity (SAN)",
                "gnosis",
                ValidationReason::OutOfRange { min: 30, max: 90 }
            )]
        );
    }

    #[test]
    fn broken_pair_sum_is_keyed_to_second_member() {
        let schema = schema(GameSetting::PlanetOfTheSong);
        let attributes = schema.step(WizardStep::Attributes).unwrap();

        let input = values(&[
            ("katra", SheetValue::Integer(12)),
            ("imperius", SheetValue::Integer(12)),
            ("dominion", SheetValue::Integer(10)),
            ("harmonia", SheetValue::Integer(10)),
        ]);

        let result = validate_step(attributes, &input);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "imperius");
        assert_eq!(
            result.errors()[0].reason,
            ValidationReason::SumMismatch {
                partner: AttributeKey::Katra,
                total: 20
            }
        );
    }

    #[test]
    fn cross_field_rules_skip_individually_invalid_fields() {
        let schema = schema(GameSetting::PlanetOfTheSong);
        let attributes = schema.step(WizardStep::Attributes).unwrap();

        let input = values(&[
            ("katra", SheetValue::Integer(25)),
            ("imperius", SheetValue::Integer(12)),
            ("dominion", SheetValue::Integer(10)),
            ("harmonia", SheetValue::Integer(10)),
        ]);

        let result = validate_step(attributes, &input);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "katra");
    }

    #[test]
    fn alignment_must_be_inverse() {
        let schema = schema(GameSetting::ConflictHorizon);
        let attributes = schema.step(WizardStep::Attributes).unwrap();

        let scheme = GameSetting::ConflictHorizon.scheme();
        let mut input = attribute_values(&AttributeAssignment::initialize(&scheme));
        input.insert("gnosis".into(), SheetValue::Integer(40));
        input.insert("entropy".into(), SheetValue::Integer(-30));

        let result = validate_step(attributes, &input);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "entropy");
        assert_eq!(
            result.errors()[0].reason,
            ValidationReason::NotInverse {
                driver: AttributeKey::Gnosis
            }
        );
    }

    #[test]
    fn campaign_id_must_be_an_identifier_when_present() {
        let schema = schema(GameSetting::ConflictHorizon);
        let identity = schema.step(WizardStep::Identity).unwrap();

        let input = values(&[
            (fields::NAME, SheetValue::from("Vex")),
            (fields::CAMPAIGN_ID, SheetValue::Integer(3)),
        ]);
        let result = validate_step(identity, &input);
        assert_eq!(
            result.errors()[0].reason,
            ValidationReason::WrongType {
                expected: ValueType::Identifier
            }
        );

        let input = values(&[
            (fields::NAME, SheetValue::from("Vex")),
            (
                fields::CAMPAIGN_ID,
                SheetValue::from(CampaignId::new().to_string()),
            ),
        ]);
        assert!(validate_step(identity, &input).is_valid());
    }

    #[test]
    fn initial_assignment_passes_full_validation_except_text_fields() {
        for setting in GameSetting::ALL {
            let schema = schema(setting);
            let mut input = attribute_values(&AttributeAssignment::initialize(&setting.scheme()));
            for (field, text) in [
                (fields::NAME, "Vex Orlan"),
                (fields::BIRTH_VECTOR, "Void-born"),
                (fields::POINT_OF_ORIGIN, "Kessel Drift"),
                (fields::FACTION, "Ascendancy"),
                (fields::EDICT, "Silence"),
            ] {
                input.insert(field.to_string(), SheetValue::from(text));
            }

            let result = validate_all(&schema, &input);
            assert!(result.is_valid(), "{setting}: {:?}", result.errors());
        }
    }

    #[test]
    fn field_error_serializes_reason_inline() {
        let error = FieldError::new("Name", "name", ValidationReason::TooLong { max: 255 });
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["field"], "name");
        assert_eq!(json["reason"], "too_long");
        assert_eq!(json["max"], 255);
        assert_eq!(json["message"], "Name must be at most 255 characters");
    }
}
