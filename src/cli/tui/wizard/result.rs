//! Aggregation of step results into a single bundle

use serde::Serialize;

use super::error::WizardError;
use super::sequence::StepSequence;
use super::step::{ChoiceResult, StepKind, StepResult, TableResult};

/// Every step's result, keyed by step kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultBundle {
    pub choice: Option<ChoiceResult>,
    pub table: Option<TableResult>,
}

impl ResultBundle {
    /// The confirmed choice, if a choice step was confirmed
    pub fn choice(&self) -> Option<&str> {
        self.choice.as_ref().and_then(|c| c.choice.as_deref())
    }
}

/// Collect the result of every step in `sequence`.
///
/// Fails with `TypeMismatch` when a step hands back a result of another kind.
pub fn aggregate(sequence: &StepSequence) -> Result<ResultBundle, WizardError> {
    let mut bundle = ResultBundle::default();

    for step in sequence.iter() {
        match (step.kind(), step.result()) {
            (StepKind::Choice, StepResult::Choice(result)) => bundle.choice = Some(result),
            (StepKind::Table, StepResult::Table(result)) => bundle.table = Some(result),
            (kind, other) => {
                return Err(WizardError::TypeMismatch {
                    kind,
                    found: other.kind(),
                })
            }
        }
    }

    Ok(bundle)
}
