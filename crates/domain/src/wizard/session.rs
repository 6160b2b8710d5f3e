//! One in-progress run through the creation wizard.

use super::error::{FinalValidationFailure, StepValidationFailure};
use super::step::{CharacterSchema, WizardStep};
use super::submission::ValidatedCharacter;
use super::validation::validate_step;
use crate::attributes::{AllocationError, AttributeAssignment, AttributeKey, AttributeScheme};
use crate::game_settings::GameSetting;
use crate::types::{SheetValue, SheetValues};

/// Wizard state for a single user.
///
/// The setting is fixed at construction. Attribute fields always mirror the live
/// assignment, which only changes through [`CreationSession::adjust_attribute`].
#[derive(Debug, Clone)]
pub struct CreationSession {
    scheme: AttributeScheme,
    schema: CharacterSchema,
    step: WizardStep,
    values: SheetValues,
    assignment: AttributeAssignment,
}

impl CreationSession {
    pub fn new(setting: GameSetting) -> Self {
        let scheme = setting.scheme();
        let schema = CharacterSchema::for_scheme(&scheme);
        let assignment = AttributeAssignment::initialize(&scheme);
        Self {
            scheme,
            schema,
            step: WizardStep::Identity,
            values: SheetValues::new(),
            assignment,
        }
    }

    pub fn setting(&self) -> GameSetting {
        self.scheme.setting()
    }

    pub fn scheme(&self) -> &AttributeScheme {
        &self.scheme
    }

    pub fn schema(&self) -> &CharacterSchema {
        &self.schema
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn assignment(&self) -> &AttributeAssignment {
        &self.assignment
    }

    /// Records a non-attribute field. Attribute keys are ignored here.
    pub fn set_field(&mut self, field: impl Into<String>, value: impl Into<SheetValue>) {
        let field = field.into();
        if field.parse::<AttributeKey>().is_ok() {
            return;
        }
        self.values.insert(field, value.into());
    }

    /// Moves one slider. On rejection the assignment is left exactly as it was.
    pub fn adjust_attribute(
        &mut self,
        key: AttributeKey,
        value: i32,
    ) -> Result<&AttributeAssignment, AllocationError> {
        self.assignment = self.scheme.adjust(&self.assignment, key, value)?;
        Ok(&self.assignment)
    }

    /// "+37 Gnosis" style summary, for settings with an alignment axis.
    pub fn alignment_descriptor(&self) -> Option<String> {
        self.scheme.alignment_descriptor(&self.assignment)
    }

    /// Everything collected so far, with attribute fields taken from the assignment.
    pub fn values(&self) -> SheetValues {
        let mut values = self.values.clone();
        for (key, value) in self.assignment.iter() {
            values.insert(key.as_str().to_string(), SheetValue::Integer(value));
        }
        values
    }

    /// Validates the current step and moves forward. The last step stays put.
    pub fn advance(&mut self) -> Result<WizardStep, StepValidationFailure> {
        if let Some(schema) = self.schema.step(self.step) {
            let result = validate_step(schema, &self.values());
            if !result.is_valid() {
                return Err(StepValidationFailure {
                    step: self.step,
                    errors: result.into_errors(),
                });
            }
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Steps back without validating.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Full re-validation of everything collected, independent of which steps passed.
    pub fn finalize(&self) -> Result<ValidatedCharacter, FinalValidationFailure> {
        ValidatedCharacter::validate(self.setting(), &self.values())
    }
}
