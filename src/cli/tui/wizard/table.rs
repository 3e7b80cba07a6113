//! Read-only tabular step

use std::sync::Arc;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::events::{KeyAction, WizardEvent};
use super::step::{Step, StepKind, StepResult, StepSignal, TableResult, CONTINUE_HINT};
use super::theme::BaseStyle;

const ELLIPSIS: char = '…';

/// Column title and display width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub title: String,
    pub width: usize,
}

impl TableColumn {
    pub fn new(title: impl Into<String>, width: usize) -> Self {
        Self {
            title: title.into(),
            width,
        }
    }
}

/// Parameters for [`TableStep::new`]
#[derive(Debug, Clone, Default)]
pub struct TableStepParams {
    pub order: u32,
    pub header: String,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

/// A pause screen showing a table; any of enter, up or down moves on
#[derive(Debug, Clone)]
pub struct TableStep {
    order: u32,
    header: String,
    columns: Arc<[TableColumn]>,
    rows: Arc<[Vec<String>]>,
    base_style: Option<BaseStyle>,
}

impl TableStep {
    pub fn new(params: TableStepParams) -> Self {
        Self {
            order: params.order,
            header: params.header,
            columns: params.columns.into(),
            rows: params.rows.into(),
            base_style: None,
        }
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Signal for `event`; the table itself never changes
    pub fn signal(&self, event: &WizardEvent) -> StepSignal {
        match event {
            WizardEvent::Key(key) => match KeyAction::from_key(key) {
                KeyAction::Quit => StepSignal::Quit,
                KeyAction::Confirm | KeyAction::Down | KeyAction::Up => StepSignal::Advance,
                KeyAction::Other => StepSignal::Continue,
            },
            _ => StepSignal::Continue,
        }
    }

    /// Width of one rendered line, padding included
    pub fn line_width(&self) -> usize {
        self.columns.iter().map(|c| c.width + 2).sum()
    }

    fn render_line<'a>(&self, mut cells: impl Iterator<Item = &'a str>) -> String {
        let mut line = String::new();

        for column in self.columns.iter() {
            let text = cells.next().unwrap_or("");
            line.push(' ');
            line.push_str(&fit_cell(text, column.width));
            line.push(' ');
        }

        line.trim_end().to_string()
    }
}

impl Step for TableStep {
    fn kind(&self) -> StepKind {
        StepKind::Table
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn handle_input(&self, event: &WizardEvent) -> (Box<dyn Step>, StepSignal) {
        (Box::new(self.clone()), self.signal(event))
    }

    fn render(&self) -> String {
        let mut view = String::new();

        if !self.header.is_empty() {
            view.push_str(&self.header);
            view.push_str("\n\n");
        }

        view.push_str(&self.render_line(self.columns.iter().map(|c| c.title.as_str())));
        view.push('\n');
        view.push_str(&"─".repeat(self.line_width()));
        view.push('\n');

        for row in self.rows.iter() {
            view.push_str(&self.render_line(row.iter().map(String::as_str)));
            view.push('\n');
        }

        view.push('\n');
        view.push_str(CONTINUE_HINT);
        view.push('\n');
        view
    }

    fn result(&self) -> StepResult {
        StepResult::Table(TableResult {})
    }

    fn with_base_style(&mut self, style: BaseStyle) {
        self.base_style = Some(style);
    }

    fn base_style(&self) -> Option<&BaseStyle> {
        self.base_style.as_ref()
    }
}

/// Pad or truncate `text` to exactly `width` terminal columns
pub fn fit_cell(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    // leave one column for the ellipsis
    let budget = width - 1;
    let mut used = 0;
    let mut fitted = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        fitted.push(c);
    }
    fitted.push(ELLIPSIS);
    used += 1;

    fitted.push_str(&" ".repeat(width - used));
    fitted
}
