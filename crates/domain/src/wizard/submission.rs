//! The validated payload handed to persistence.

use serde::Serialize;

use super::error::FinalValidationFailure;
use super::step::{fields, CharacterSchema};
use super::validation::{validate_all, FieldError, ValidationReason};
use crate::aggregates::CharacterOrigin;
use crate::attributes::{AttributeAssignment, AttributeKey, AttributeScheme, SchemeViolation};
use crate::game_settings::GameSetting;
use crate::ids::CampaignId;
use crate::types::SheetValues;
use crate::value_objects::CharacterName;

/// A character submission that passed full-schema validation.
///
/// There is no other way to build one, so anything holding a `ValidatedCharacter` has
/// been re-checked against every step, whatever the wizard did before.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedCharacter {
    setting: GameSetting,
    name: CharacterName,
    campaign_id: Option<CampaignId>,
    origin: CharacterOrigin,
    attributes: AttributeAssignment,
    proficiencies: Option<String>,
    equipment: Option<String>,
    notes: Option<String>,
}

impl ValidatedCharacter {
    /// Runs every step's rules over `values` and extracts the typed payload.
    ///
    /// Fields outside the setting's schema are dropped.
    pub fn validate(
        setting: GameSetting,
        values: &SheetValues,
    ) -> Result<Self, FinalValidationFailure> {
        let scheme = setting.scheme();
        let schema = CharacterSchema::for_scheme(&scheme);

        let result = validate_all(&schema, values);
        if !result.is_valid() {
            return Err(FinalValidationFailure {
                errors: result.into_errors(),
            });
        }

        let mut extract = Extractor {
            values,
            errors: Vec::new(),
        };

        let name = extract
            .required_text(fields::NAME)
            .and_then(|name| CharacterName::new(name).ok());
        let campaign_id = extract
            .optional_text(fields::CAMPAIGN_ID)
            .and_then(|raw| raw.parse::<CampaignId>().ok());
        let origin = CharacterOrigin {
            birth_vector: extract.required_text(fields::BIRTH_VECTOR).unwrap_or_default(),
            point_of_origin: extract
                .required_text(fields::POINT_OF_ORIGIN)
                .unwrap_or_default(),
            faction: extract.required_text(fields::FACTION).unwrap_or_default(),
            edict: extract.required_text(fields::EDICT).unwrap_or_default(),
        };
        let attributes = extract.attributes(&scheme);

        let proficiencies = extract.optional_text(fields::PROFICIENCIES);
        let equipment = extract.optional_text(fields::EQUIPMENT);
        let notes = extract.optional_text(fields::NOTES);

        let mut errors = extract.errors;
        match name {
            Some(name) if errors.is_empty() => Ok(Self {
                setting,
                name,
                campaign_id,
                origin,
                attributes,
                proficiencies,
                equipment,
                notes,
            }),
            name => {
                if name.is_none() && !errors.iter().any(|e| e.field == fields::NAME) {
                    errors.push(FieldError::new("Name", fields::NAME, ValidationReason::Required));
                }
                Err(FinalValidationFailure { errors })
            }
        }
    }

    pub fn setting(&self) -> GameSetting {
        self.setting
    }

    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    pub fn campaign_id(&self) -> Option<CampaignId> {
        self.campaign_id
    }

    pub fn origin(&self) -> &CharacterOrigin {
        &self.origin
    }

    pub fn attributes(&self) -> &AttributeAssignment {
        &self.attributes
    }

    pub fn proficiencies(&self) -> Option<&str> {
        self.proficiencies.as_deref()
    }

    pub fn equipment(&self) -> Option<&str> {
        self.equipment.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

struct Extractor<'a> {
    values: &'a SheetValues,
    errors: Vec<FieldError>,
}

impl Extractor<'_> {
    fn optional_text(&self, field: &str) -> Option<String> {
        self.values
            .get(field)
            .and_then(|value| value.as_str())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }

    fn required_text(&mut self, field: &str) -> Option<String> {
        let text = self.optional_text(field);
        if text.is_none() {
            self.errors
                .push(FieldError::new(field, field, ValidationReason::Required));
        }
        text
    }

    /// Reads the scheme's keys and re-checks the scheme invariants on the result.
    fn attributes(&mut self, scheme: &AttributeScheme) -> AttributeAssignment {
        let assignment = AttributeAssignment::from_raw(scheme.keys().filter_map(|key| {
            self.values
                .get(key.as_str())
                .and_then(|value| value.as_i32())
                .map(|value| (key, value))
        }));

        for violation in scheme.violations(&assignment) {
            self.errors.push(violation_error(scheme, violation));
        }
        assignment
    }
}

fn violation_error(scheme: &AttributeScheme, violation: SchemeViolation) -> FieldError {
    let label = |key: AttributeKey| scheme.label(key).unwrap_or(key.as_str()).to_string();
    match violation {
        SchemeViolation::Missing { key } | SchemeViolation::Unexpected { key } => {
            FieldError::new(&label(key), key.as_str(), ValidationReason::Required)
        }
        SchemeViolation::OutOfRange { key, range, .. } => FieldError::new(
            &label(key),
            key.as_str(),
            ValidationReason::OutOfRange {
                min: range.min,
                max: range.max,
            },
        ),
        SchemeViolation::SumMismatch { pair, .. } => FieldError::new(
            &label(pair.second),
            pair.second.as_str(),
            ValidationReason::SumMismatch {
                partner: pair.first,
                total: pair.total,
            },
        ),
        SchemeViolation::NotInverse { driver, derived, .. } => FieldError::new(
            &label(derived),
            derived.as_str(),
            ValidationReason::NotInverse { driver },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SheetValue;

    fn complete_values(setting: GameSetting) -> SheetValues {
        let mut values: SheetValues = AttributeAssignment::initialize(&setting.scheme())
            .iter()
            .map(|(key, value)| (key.as_str().to_string(), SheetValue::Integer(value)))
            .collect();
        for (field, text) in [
            (fields::NAME, "  Vex Orlan "),
            (fields::BIRTH_VECTOR, "Void-born"),
            (fields::POINT_OF_ORIGIN, "Kessel Drift"),
            (fields::FACTION, "Ascendancy"),
            (fields::EDICT, "Silence"),
            (fields::NOTES, "   "),
            (fields::EQUIPMENT, "Vibro-knife"),
        ] {
            values.insert(field.to_string(), SheetValue::from(text));
        }
        values
    }

    #[test]
    fn complete_submission_is_accepted_and_normalized() {
        let values = complete_values(GameSetting::ConflictHorizon);
        let validated = ValidatedCharacter::validate(GameSetting::ConflictHorizon, &values).unwrap();

        assert_eq!(validated.name().as_str(), "Vex Orlan");
        assert_eq!(validated.origin().faction, "Ascendancy");
        assert_eq!(validated.attributes().get(AttributeKey::Gnosis), Some(0));
        assert_eq!(validated.equipment(), Some("Vibro-knife"));
        assert_eq!(validated.notes(), None);
        assert_eq!(validated.campaign_id(), None);
    }

    #[test]
    fn tampered_pair_fails_final_validation() {
        let mut values = complete_values(GameSetting::PlanetOfTheSong);
        values.insert("katra".into(), SheetValue::Integer(19));

        let failure =
            ValidatedCharacter::validate(GameSetting::PlanetOfTheSong, &values).unwrap_err();
        assert_eq!(failure.fields().collect::<Vec<_>>(), vec!["imperius"]);
    }

    #[test]
    fn skipped_steps_are_caught_at_submission() {
        let mut values = SheetValues::new();
        values.insert(fields::NAME.into(), SheetValue::from("Vex"));

        let failure =
            ValidatedCharacter::validate(GameSetting::HarrowingTruth, &values).unwrap_err();
        let fields: Vec<_> = failure.fields().collect();
        assert!(fields.contains(&"birthVector"));
        assert!(fields.contains(&"katra"));
        assert!(!fields.contains(&"name"));
        assert_eq!(failure.errors.len(), 4 + 6);
    }

    #[test]
    fn attributes_outside_the_scheme_are_dropped() {
        let mut values = complete_values(GameSetting::PlanetOfTheSong);
        values.insert("gnosis".into(), SheetValue::Integer(40));

        let validated = ValidatedCharacter::validate(GameSetting::PlanetOfTheSong, &values).unwrap();
        assert_eq!(validated.attributes().len(), 4);
        assert_eq!(validated.attributes().get(AttributeKey::Gnosis), None);
    }
}
