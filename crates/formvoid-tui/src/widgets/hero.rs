//! Hero band with the context sentence

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// "I feel <condition> and need <need>."
///
/// The picked words are the current picker choice, not the applied filter.
pub struct HeroSentence<'a> {
    condition: Option<&'a str>,
    need: Option<&'a str>,
}

impl<'a> HeroSentence<'a> {
    pub fn new(condition: Option<&'a str>, need: Option<&'a str>) -> Self {
        Self { condition, need }
    }
}

fn choice(word: Option<&str>) -> Span<'static> {
    Span::styled(
        format!("[{}]", word.unwrap_or("-")),
        styles::accent_bold(),
    )
}

impl Widget for HeroSentence<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::rule_below();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled("■ MANIFESTO 01", styles::accent())),
            Line::from(vec![
                Span::styled("I feel ", styles::text_bold()),
                choice(self.condition),
                Span::styled(" and need ", styles::text_bold()),
                choice(self.need),
                Span::styled(".", styles::text_bold()),
            ]),
            Line::from(Span::styled(
                "c/C condition · n/N need · f find",
                styles::text_faint(),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_sentence_shows_picked_words() {
        let mut term = TestTerminal::new();
        term.render_widget(
            HeroSentence::new(Some("anxious"), Some("structure")),
            Rect::new(0, 0, 80, 4),
        );

        assert!(term.line_contains(1, "I feel [anxious] and need [structure]."));
    }

    #[test]
    fn test_empty_option_lists_render_placeholder() {
        let mut term = TestTerminal::new();
        term.render_widget(HeroSentence::new(None, None), Rect::new(0, 0, 80, 4));

        assert!(term.buffer_contains("I feel [-] and need [-]."));
    }
}
