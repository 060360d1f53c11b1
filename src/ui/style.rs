use crossterm::style::{StyledContent, Stylize};

use crate::ui::theme::colors;

/// Semantic color of a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

/// Color `text` by tone; plain text when color is disabled.
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    format!("{}", styled(text, tone))
}

/// Like [`paint`], bold.
pub fn paint_bold(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    format!("{}", styled(text, tone).bold())
}

fn styled(text: &str, tone: Tone) -> StyledContent<&str> {
    let color = match tone {
        Tone::Success => colors::SUCCESS,
        Tone::Error => colors::ERROR,
        Tone::Warning => colors::WARNING,
        Tone::Info => colors::INFO,
        Tone::Dim => colors::DIM,
    };
    text.with(color)
}
