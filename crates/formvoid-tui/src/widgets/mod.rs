//! Custom widget components

mod about;
mod archive_table;
mod detail;
mod empty_state;
mod filter_bar;
mod footer;
mod header;
mod hero;
pub mod masonry_grid;
mod notice;

pub use about::AboutView;
pub use archive_table::ArchiveTable;
pub use detail::DetailView;
pub use empty_state::EmptyState;
pub use filter_bar::FilterBar;
pub use footer::KeyHints;
pub use header::MainHeader;
pub use hero::HeroSentence;
pub use masonry_grid::{GridViewport, MasonryGrid};
pub use notice::{centered_rect, NoticeModal};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max` terminal columns, marking the cut with `…`
///
/// Hangul and other wide characters count as two columns.
pub fn fit_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width_keeps_short_text() {
        assert_eq!(fit_width("SYSTEM_LOG", 20), "SYSTEM_LOG");
    }

    #[test]
    fn test_fit_width_ascii() {
        assert_eq!(fit_width("Morning Routine", 8), "Morning…");
    }

    #[test]
    fn test_fit_width_counts_wide_chars_twice() {
        // Each Hangul syllable is two columns
        let cut = fit_width("비움의 미학", 6);
        assert_eq!(cut, "비움…");
        assert!(cut.width() <= 6);
    }

    #[test]
    fn test_fit_width_zero() {
        assert_eq!(fit_width("anything", 0), "");
    }
}
