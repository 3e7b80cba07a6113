//! The capability contract shared by every wizard step

use std::fmt;

use ratatui::widgets::Paragraph;
use serde::Serialize;

use super::events::WizardEvent;
use super::theme::BaseStyle;

/// Hint rendered below every step body
pub const CONTINUE_HINT: &str = "(press enter to continue)";

/// Variant tag every step declares about itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Choice,
    Table,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Choice => "choice",
            StepKind::Table => "table",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a step tells the orchestrator after handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSignal {
    /// Stay on this step
    Continue,
    /// The step is done, move to the next ordered step
    Advance,
    /// Stop the whole program
    Quit,
}

/// Result of a choice step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChoiceResult {
    /// The confirmed option, `None` until enter is pressed
    pub choice: Option<String>,
}

/// Result of a table step; tables are display only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableResult {}

/// Snapshot extracted from a step, tagged with the kind that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    Choice(ChoiceResult),
    Table(TableResult),
}

impl StepResult {
    pub fn kind(&self) -> StepKind {
        match self {
            StepResult::Choice(_) => StepKind::Choice,
            StepResult::Table(_) => StepKind::Table,
        }
    }
}

/// One screen of the wizard.
///
/// Steps never mutate themselves while handling input: `handle_input`
/// returns the next step value and the orchestrator decides whether to
/// store it.
pub trait Step: fmt::Debug {
    /// Variant tag used for aggregation and replacement
    fn kind(&self) -> StepKind;

    /// Position of the step, fixed at construction
    fn order(&self) -> u32;

    /// Handle one event, returning the next step state and a signal
    fn handle_input(&self, event: &WizardEvent) -> (Box<dyn Step>, StepSignal);

    /// Plain text view: header, body, then the continue hint
    fn render(&self) -> String;

    /// Snapshot of the step result, valid before any interaction
    fn result(&self) -> StepResult;

    /// Install the shared rendering style
    fn with_base_style(&mut self, style: BaseStyle);

    fn base_style(&self) -> Option<&BaseStyle>;

    /// Rendered text wrapped in the installed style
    fn widget(&self) -> Paragraph<'static> {
        let paragraph = Paragraph::new(self.render());
        match self.base_style() {
            Some(style) => style.apply(paragraph),
            None => paragraph,
        }
    }
}
