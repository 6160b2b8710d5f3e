//! Wizard step schemas.
//!
//! The character form is split into four steps. Each step owns the rules for the
//! fields it presents; the attribute step is generated from the setting's scheme.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::{AlignmentRule, AttributeScheme, OpposedPair};
use crate::game_settings::GameSetting;
use crate::value_objects::MAX_NAME_LENGTH;

/// Field ids shared by the wizard, the wire format and stored records.
pub mod fields {
    pub const NAME: &str = "name";
    pub const CAMPAIGN_ID: &str = "campaignId";
    pub const BIRTH_VECTOR: &str = "birthVector";
    pub const POINT_OF_ORIGIN: &str = "pointOfOrigin";
    pub const FACTION: &str = "faction";
    pub const EDICT: &str = "edict";
    pub const PROFICIENCIES: &str = "proficiencies";
    pub const EQUIPMENT: &str = "equipment";
    pub const NOTES: &str = "notes";
}

/// Storage limit for origin fields.
pub const MAX_ORIGIN_LENGTH: usize = 100;

/// Upper bound for the freeform note fields.
pub const MAX_NOTES_LENGTH: usize = 10_000;

// =============================================================================
// Steps
// =============================================================================

/// Wizard steps in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Identity,
    Origin,
    Attributes,
    Notes,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Identity,
        WizardStep::Origin,
        WizardStep::Attributes,
        WizardStep::Notes,
    ];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Identity => 0,
            WizardStep::Origin => 1,
            WizardStep::Attributes => 2,
            WizardStep::Notes => 3,
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Identity => "Identity",
            WizardStep::Origin => "Origin & Faction",
            WizardStep::Attributes => "Attributes",
            WizardStep::Notes => "Proficiencies & Notes",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// =============================================================================
// Field rules
// =============================================================================

/// What kind of value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, trimmed, at most `max_length` characters.
    Text { max_length: usize },
    /// Whole number in `[min, max]`.
    Integer { min: i32, max: i32 },
    /// A record id in UUID form.
    Identifier,
}

impl FieldKind {
    pub fn value_type(&self) -> ValueType {
        match self {
            FieldKind::Text { .. } => ValueType::Text,
            FieldKind::Integer { .. } => ValueType::Integer,
            FieldKind::Identifier => ValueType::Identifier,
        }
    }
}

/// Value type expected by a field, reported back on type mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Text,
    Integer,
    Identifier,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::Text => "text",
            ValueType::Integer => "a whole number",
            ValueType::Identifier => "an identifier",
        })
    }
}

/// Rule for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    /// Field id
    pub field: String,
    /// Display label
    pub label: String,
    pub kind: FieldKind,
    /// Missing, null and blank values fail when set
    pub required: bool,
}

impl FieldRule {
    pub fn text(field: &str, label: &str, max_length: usize, required: bool) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text { max_length },
            required,
        }
    }

    pub fn integer(field: &str, label: &str, min: i32, max: i32) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
            kind: FieldKind::Integer { min, max },
            required: true,
        }
    }

    pub fn identifier(field: &str, label: &str, required: bool) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
            kind: FieldKind::Identifier,
            required,
        }
    }
}

/// Rule spanning two attribute fields. Checked only once both fields pass on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum CrossFieldRule {
    OpposedSum { pair: OpposedPair },
    Inverse { rule: AlignmentRule },
}

// =============================================================================
// Schemas
// =============================================================================

/// The fields and cross-field rules one step presents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepSchema {
    pub step: WizardStep,
    pub fields: Vec<FieldRule>,
    #[serde(default)]
    pub cross_field: Vec<CrossFieldRule>,
}

impl StepSchema {
    pub fn field(&self, field: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.field == field)
    }
}

/// Complete wizard schema for one setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSchema {
    setting: GameSetting,
    steps: Vec<StepSchema>,
}

impl CharacterSchema {
    pub fn for_setting(setting: GameSetting) -> Self {
        Self::for_scheme(&setting.scheme())
    }

    pub fn for_scheme(scheme: &AttributeScheme) -> Self {
        let identity = StepSchema {
            step: WizardStep::Identity,
            fields: vec![
                FieldRule::text(fields::NAME, "Name", MAX_NAME_LENGTH, true),
                FieldRule::identifier(fields::CAMPAIGN_ID, "Campaign", false),
            ],
            cross_field: Vec::new(),
        };

        let origin = StepSchema {
            step: WizardStep::Origin,
            fields: vec![
                FieldRule::text(fields::BIRTH_VECTOR, "Birth Vector", MAX_ORIGIN_LENGTH, true),
                FieldRule::text(
                    fields::POINT_OF_ORIGIN,
                    "Point of Origin",
                    MAX_ORIGIN_LENGTH,
                    true,
                ),
                FieldRule::text(fields::FACTION, "Faction", MAX_ORIGIN_LENGTH, true),
                FieldRule::text(fields::EDICT, "Edict", MAX_ORIGIN_LENGTH, true),
            ],
            cross_field: Vec::new(),
        };

        let attributes = StepSchema {
            step: WizardStep::Attributes,
            fields: scheme
                .slots()
                .iter()
                .map(|slot| {
                    let range = slot.kind.range();
                    FieldRule::integer(slot.key.as_str(), &slot.label, range.min, range.max)
                })
                .collect(),
            cross_field: scheme
                .opposed_pairs()
                .iter()
                .map(|pair| CrossFieldRule::OpposedSum { pair: *pair })
                .chain(
                    scheme
                        .alignment()
                        .map(|rule| CrossFieldRule::Inverse { rule: *rule }),
                )
                .collect(),
        };

        let notes = StepSchema {
            step: WizardStep::Notes,
            fields: vec![
                FieldRule::text(fields::PROFICIENCIES, "Proficiencies", MAX_NOTES_LENGTH, false),
                FieldRule::text(fields::EQUIPMENT, "Equipment", MAX_NOTES_LENGTH, false),
                FieldRule::text(fields::NOTES, "Notes", MAX_NOTES_LENGTH, false),
            ],
            cross_field: Vec::new(),
        };

        Self {
            setting: scheme.setting(),
            steps: vec![identity, origin, attributes, notes],
        }
    }

    pub fn setting(&self) -> GameSetting {
        self.setting
    }

    pub fn steps(&self) -> &[StepSchema] {
        &self.steps
    }

    /// Sub-schema for one step.
    pub fn step(&self, step: WizardStep) -> Option<&StepSchema> {
        self.steps.iter().find(|schema| schema.step == step)
    }
}
