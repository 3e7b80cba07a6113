//! Ordered step storage with per-kind uniqueness

use std::collections::HashSet;

use tracing::debug;

use super::error::WizardError;
use super::step::{Step, StepKind};

/// Ordered steps of a wizard, at most one per kind
#[derive(Debug)]
pub struct StepSequence {
    steps: Vec<Box<dyn Step>>,
}

impl StepSequence {
    pub fn new(steps: Vec<Box<dyn Step>>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::EmptySequence);
        }

        let mut kinds = HashSet::new();
        for step in &steps {
            if !kinds.insert(step.kind()) {
                return Err(WizardError::DuplicateKind(step.kind()));
            }
        }

        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Step> {
        self.steps.get(index).map(|s| s.as_ref())
    }

    /// Step at `index`; panics when out of bounds
    pub(crate) fn at(&self, index: usize) -> &dyn Step {
        self.steps[index].as_ref()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Box<dyn Step>> {
        self.steps.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Step> {
        self.steps.iter().map(|s| s.as_ref())
    }

    /// Index of the first step: the only step, or the one with order 1
    pub fn first(&self) -> Option<usize> {
        if self.steps.len() == 1 {
            return Some(0);
        }
        self.position_of_order(1)
    }

    /// Index of the first step whose order equals `order`
    pub fn position_of_order(&self, order: u32) -> Option<usize> {
        self.steps.iter().position(|s| s.order() == order)
    }

    /// Index of the step ordered right after the one at `index`
    pub fn next_after(&self, index: usize) -> Option<usize> {
        let current = self.steps.get(index)?;
        let order = current.order().checked_add(1)?;
        self.position_of_order(order)
    }

    pub fn position_of_kind(&self, kind: StepKind) -> Option<usize> {
        self.steps.iter().position(|s| s.kind() == kind)
    }

    /// Swap in a step at `index`, returning the previous one
    pub(crate) fn set(&mut self, index: usize, step: Box<dyn Step>) -> Option<Box<dyn Step>> {
        let slot = self.steps.get_mut(index)?;
        Some(std::mem::replace(slot, step))
    }

    /// Replace the step of the same kind as `step`, returning its index.
    ///
    /// The replacement keeps its own order value.
    pub fn replace(&mut self, step: Box<dyn Step>) -> Result<usize, WizardError> {
        let kind = step.kind();
        let index = self
            .position_of_kind(kind)
            .ok_or(WizardError::NoStepOfKind(kind))?;

        debug!(%kind, index, order = step.order(), "Replacing step");
        self.steps[index] = step;
        Ok(index)
    }
}
