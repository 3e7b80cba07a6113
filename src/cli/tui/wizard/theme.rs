//! Shared visual style applied to every step

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Padding, Paragraph},
};

use crate::config::StyleConfig;

/// Shared presentation installed on every step that becomes active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseStyle {
    pub border: Style,
    pub text: Style,
    pub padding_top: u16,
    pub padding_left: u16,
    /// Maximum width of the framed step, in terminal columns
    pub width: u16,
}

impl BaseStyle {
    pub fn new(config: &StyleConfig) -> Self {
        let mut text = Style::default();
        if config.bold {
            text = text.add_modifier(Modifier::BOLD);
        }

        Self {
            border: Style::default().fg(Color::Indexed(config.border_color)),
            text,
            padding_top: config.padding_top,
            padding_left: config.padding_left,
            width: config.width,
        }
    }

    pub fn block(&self) -> Block<'static> {
        Block::bordered()
            .border_style(self.border)
            .padding(Padding::new(self.padding_left, 0, self.padding_top, 0))
    }

    /// Frame a paragraph with the border, padding and text style
    pub fn apply<'a>(&self, paragraph: Paragraph<'a>) -> Paragraph<'a> {
        paragraph.block(self.block()).style(self.text)
    }
}

impl From<&StyleConfig> for BaseStyle {
    fn from(config: &StyleConfig) -> Self {
        Self::new(config)
    }
}
