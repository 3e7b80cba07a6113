//! Errors raised by the step wizard

use std::fmt;

use thiserror::Error;

use super::step::StepKind;

/// Errors produced while sequencing wizard steps
#[derive(Error, Debug)]
pub enum WizardError {
    /// A step produced a result that does not belong to its declared kind
    #[error("unexpected result type: {kind} step produced a {found} result")]
    TypeMismatch { kind: StepKind, found: StepKind },

    /// The broadcast callback vetoed a transition
    #[error("transition from step {from} to step {to} aborted: {source}")]
    TransitionAborted {
        from: u32,
        to: u32,
        #[source]
        source: anyhow::Error,
    },

    /// The terminal loop could not start or stopped abnormally
    #[error("failed to run: {0}")]
    RunFailure(#[source] std::io::Error),

    #[error("a wizard needs at least one step")]
    EmptySequence,

    #[error("no step with order 1 found")]
    MissingFirstStep,

    #[error("more than one {0} step in the sequence")]
    DuplicateKind(StepKind),

    #[error("no {0} step to replace")]
    NoStepOfKind(StepKind),

    /// Errors recorded during a run, surfaced when the run ends
    #[error("{0}")]
    Accumulated(ErrorChain),
}

/// Append-only list of errors recorded by the orchestrator.
///
/// Displays as every message joined with `": "`, oldest first.
#[derive(Debug, Default)]
pub struct ErrorChain {
    errors: Vec<WizardError>,
}

impl ErrorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: WizardError) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WizardError> {
        self.errors.iter()
    }

    pub fn last(&self) -> Option<&WizardError> {
        self.errors.last()
    }
}

impl fmt::Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorChain {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors
            .first()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
