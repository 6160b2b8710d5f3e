use thiserror::Error;

use super::step::WizardStep;
use super::validation::FieldError;

/// The current step has invalid fields. The user stays on the step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{step} step has {} invalid field(s)", .errors.len())]
pub struct StepValidationFailure {
    pub step: WizardStep,
    pub errors: Vec<FieldError>,
}

/// Full-schema validation failed at submission.
///
/// Only reachable when a step was skipped or the collected values were altered after
/// the step passed, so callers must abort the submission rather than retry the step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Submission failed full validation: {} invalid field(s)", .errors.len())]
pub struct FinalValidationFailure {
    pub errors: Vec<FieldError>,
}

impl FinalValidationFailure {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|error| error.field.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeKey;
    use crate::wizard::ValidationReason;

    fn sum_error() -> FieldError {
        FieldError::new(
            "Imperius",
            "imperius",
            ValidationReason::SumMismatch {
                partner: AttributeKey::Katra,
                total: 20,
            },
        )
    }

    #[test]
    fn step_and_final_failures_render_differently() {
        let step = StepValidationFailure {
            step: WizardStep::Attributes,
            errors: vec![sum_error()],
        };
        let submission = FinalValidationFailure {
            errors: vec![sum_error()],
        };

        assert_eq!(step.to_string(), "Attributes step has 1 invalid field(s)");
        assert_eq!(
            submission.to_string(),
            "Submission failed full validation: 1 invalid field(s)"
        );
        assert_eq!(submission.fields().collect::<Vec<_>>(), vec!["imperius"]);
    }
}
