//! State machine that sequences wizard steps

use ratatui::widgets::Paragraph;
use tracing::{debug, info, warn};

use super::error::{ErrorChain, WizardError};
use super::events::{key_name, WizardEvent};
use super::result::{aggregate, ResultBundle};
use super::sequence::StepSequence;
use super::step::{Step, StepSignal};
use super::theme::BaseStyle;

/// Callback invoked with the aggregated results before every transition.
///
/// It may replace steps through the sequence; returning an error aborts
/// the transition.
pub type BroadcastFn = Box<dyn FnMut(&ResultBundle, &mut StepSequence) -> anyhow::Result<()>>;

/// What the render loop should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
}

/// Owns the steps, the active step and the errors of a wizard run
pub struct Orchestrator {
    sequence: StepSequence,
    /// Index of the active step in `sequence`
    active: usize,
    base_style: BaseStyle,
    broadcast: Option<BroadcastFn>,
    errors: ErrorChain,
    terminated: bool,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("sequence", &self.sequence)
            .field("active", &self.active)
            .field("errors", &self.errors)
            .field("terminated", &self.terminated)
            .finish_non_exhaustive()
    }
}

impl Orchestrator {
    /// Create an orchestrator positioned on the first step
    pub fn new(steps: Vec<Box<dyn Step>>, base_style: BaseStyle) -> Result<Self, WizardError> {
        let mut sequence = StepSequence::new(steps)?;
        let active = sequence.first().ok_or(WizardError::MissingFirstStep)?;

        if let Some(step) = sequence.get_mut(active) {
            step.with_base_style(base_style.clone());
        }

        debug!(steps = sequence.len(), active, "Wizard created");

        Ok(Self {
            sequence,
            active,
            base_style,
            broadcast: None,
            errors: ErrorChain::new(),
            terminated: false,
        })
    }

    /// Install the broadcast callback
    pub fn on_transition<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ResultBundle, &mut StepSequence) -> anyhow::Result<()> + 'static,
    {
        self.broadcast = Some(Box::new(callback));
        self
    }

    pub fn init(&self) -> Command {
        Command::None
    }

    /// Feed one event through the active step
    pub fn update(&mut self, event: WizardEvent) -> Command {
        if self.terminated {
            return Command::Quit;
        }

        if let WizardEvent::Key(key) = &event {
            debug!(key = %key_name(key), active = self.active, "Key event");
        }

        let (next, signal) = self.active_step().handle_input(&event);

        match signal {
            StepSignal::Quit => {
                info!(order = self.active_step().order(), "Quit requested");
                self.terminated = true;
                Command::Quit
            }
            StepSignal::Continue => {
                self.sequence.set(self.active, next);
                Command::None
            }
            StepSignal::Advance => {
                self.sequence.set(self.active, next);
                self.advance();
                Command::None
            }
        }
    }

    /// Move to the next ordered step if the broadcast callback allows it
    fn advance(&mut self) {
        let Some(next) = self.sequence.next_after(self.active) else {
            debug!(order = self.active_step().order(), "Last step reached");
            return;
        };

        let from = self.active_step().order();
        let to = self.sequence.at(next).order();

        let outcome = self.broadcast_result(from, to);

        // the callback may have replaced the active step
        self.style_active();

        match outcome {
            Ok(()) => {
                info!(from, to, "Step transition");
                self.active = next;
                self.style_active();
            }
            Err(err) => {
                warn!(from, to, error = %err, "Step transition aborted");
                self.errors.push(err);
            }
        }
    }

    /// Aggregate every step's result and hand it to the callback
    fn broadcast_result(&mut self, from: u32, to: u32) -> Result<(), WizardError> {
        let bundle = aggregate(&self.sequence)?;

        let Some(callback) = self.broadcast.as_mut() else {
            return Ok(());
        };

        callback(&bundle, &mut self.sequence).map_err(|source| WizardError::TransitionAborted {
            from,
            to,
            source,
        })
    }

    fn style_active(&mut self) {
        let style = self.base_style.clone();
        if let Some(step) = self.sequence.get_mut(self.active) {
            step.with_base_style(style);
        }
    }

    pub fn active_step(&self) -> &dyn Step {
        self.sequence.at(self.active)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    pub fn base_style(&self) -> &BaseStyle {
        &self.base_style
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Plain text of the active step
    pub fn view(&self) -> String {
        self.active_step().render()
    }

    /// Styled widget of the active step
    pub fn widget(&self) -> Paragraph<'static> {
        self.active_step().widget()
    }

    pub fn errors(&self) -> &ErrorChain {
        &self.errors
    }

    /// The accumulated errors, if any were recorded
    pub fn error(&self) -> Option<&ErrorChain> {
        if self.errors.is_empty() {
            None
        } else {
            Some(&self.errors)
        }
    }

    /// Current aggregated results
    pub fn result(&self) -> Result<ResultBundle, WizardError> {
        aggregate(&self.sequence)
    }

    /// Replace the step of the same kind as `step`
    pub fn update_step(&mut self, step: Box<dyn Step>) -> Result<(), WizardError> {
        let index = self.sequence.replace(step)?;
        if index == self.active {
            self.style_active();
        }
        Ok(())
    }

    /// End the run: the final results, or every error recorded on the way
    pub fn finish(self) -> Result<ResultBundle, WizardError> {
        if !self.errors.is_empty() {
            return Err(WizardError::Accumulated(self.errors));
        }
        aggregate(&self.sequence)
    }
}
