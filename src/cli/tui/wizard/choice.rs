//! Single-selection list step

use super::events::{KeyAction, WizardEvent};
use super::step::{ChoiceResult, Step, StepKind, StepResult, StepSignal, CONTINUE_HINT};
use super::theme::BaseStyle;

/// Parameters for [`ChoiceStep::new`]
#[derive(Debug, Clone, Default)]
pub struct ChoiceStepParams {
    pub order: u32,
    pub options: Vec<String>,
    pub header: String,
    /// Initial cursor, clamped into the option range
    pub cursor: usize,
    /// Pre-selected option
    pub choice: Option<String>,
}

/// A list of labels with a cursor; enter confirms the option under it
#[derive(Debug, Clone)]
pub struct ChoiceStep {
    order: u32,
    cursor: usize,
    selected: Option<String>,
    options: Vec<String>,
    header: String,
    base_style: Option<BaseStyle>,
}

impl ChoiceStep {
    pub fn new(params: ChoiceStepParams) -> Self {
        let cursor = params.cursor.min(params.options.len().saturating_sub(1));

        Self {
            order: params.order,
            cursor,
            selected: params.choice,
            options: params.options,
            header: params.header,
            base_style: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Next state of this step after `event`; non-key events change nothing
    pub fn update(&self, event: &WizardEvent) -> (ChoiceStep, StepSignal) {
        match event {
            WizardEvent::Key(key) => self.next_state(KeyAction::from_key(key)),
            _ => (self.clone(), StepSignal::Continue),
        }
    }

    fn next_state(&self, action: KeyAction) -> (ChoiceStep, StepSignal) {
        let mut next = self.clone();
        let len = self.options.len();

        let signal = match action {
            KeyAction::Quit => return (next, StepSignal::Quit),
            KeyAction::Confirm => {
                if let Some(option) = self.options.get(self.cursor) {
                    next.selected = Some(option.clone());
                }
                StepSignal::Advance
            }
            KeyAction::Down => {
                if len > 0 {
                    next.cursor = (self.cursor + 1) % len;
                }
                StepSignal::Continue
            }
            KeyAction::Up => {
                if len > 0 {
                    next.cursor = (self.cursor + len - 1) % len;
                }
                StepSignal::Continue
            }
            KeyAction::Other => StepSignal::Continue,
        };

        (next, signal)
    }
}

impl Step for ChoiceStep {
    fn kind(&self) -> StepKind {
        StepKind::Choice
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn handle_input(&self, event: &WizardEvent) -> (Box<dyn Step>, StepSignal) {
        let (next, signal) = self.update(event);
        (Box::new(next), signal)
    }

    fn render(&self) -> String {
        let mut view = String::new();

        if !self.header.is_empty() {
            view.push_str(&self.header);
            view.push_str("\n\n");
        }

        for (i, option) in self.options.iter().enumerate() {
            let marker = if i == self.cursor { "(•) " } else { "( ) " };
            view.push_str(marker);
            view.push_str(option);
            view.push('\n');
        }

        view.push('\n');
        view.push_str(CONTINUE_HINT);
        view.push('\n');
        view
    }

    fn result(&self) -> StepResult {
        StepResult::Choice(ChoiceResult {
            choice: self.selected.clone(),
        })
    }

    fn with_base_style(&mut self, style: BaseStyle) {
        self.base_style = Some(style);
    }

    fn base_style(&self) -> Option<&BaseStyle> {
        self.base_style.as_ref()
    }
}
