//! Semantic style builders for the paper-and-ink theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::INK)
}

pub fn text_bold() -> Style {
    text_primary().add_modifier(Modifier::BOLD)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::INK_MUTED)
}

pub fn text_faint() -> Style {
    Style::default().fg(palette::INK_FAINT)
}

/// Filler quotes
pub fn text_quote() -> Style {
    text_muted().add_modifier(Modifier::ITALIC)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::BRICK)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Active entry of a nav or filter row
pub fn selected() -> Style {
    text_primary().add_modifier(Modifier::UNDERLINED)
}

// --- Surfaces ---
pub fn page() -> Style {
    Style::default().bg(palette::PAPER).fg(palette::INK)
}

pub fn modal() -> Style {
    Style::default().bg(palette::PAPER_RAISED).fg(palette::INK)
}

// --- Blocks ---

/// Hairline-bordered card; the focused card gets the accent border
pub fn card_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(if focused {
            accent_bold()
        } else {
            Style::default().fg(palette::LINE)
        })
}

/// A single hairline under a band of the page
pub fn rule_below() -> Block<'static> {
    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette::LINE))
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(accent_bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(accent())
        .style(modal())
}
