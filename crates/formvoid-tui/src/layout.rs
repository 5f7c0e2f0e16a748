//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: brand row, nav row, rule
pub const HEADER_HEIGHT: u16 = 3;
/// Hero: label, sentence, hint, rule
pub const HERO_HEIGHT: u16 = 4;
/// Filter bar: options, rule
pub const FILTER_BAR_HEIGHT: u16 = 2;

/// Screen areas shared by every screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Screen-specific content
    pub body: Rect,
    /// Key hints
    pub footer: Rect,
}

/// Sections of the HOME body
#[derive(Debug, Clone, Copy)]
pub struct HomeAreas {
    pub hero: Rect,
    pub filter_bar: Rect,
    /// Grid, table or empty state
    pub listing: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        body,
        footer,
    }
}

/// Split the HOME body; the hero collapses first on short terminals
pub fn home(body: Rect) -> HomeAreas {
    let hero_height = if body.height >= HERO_HEIGHT + FILTER_BAR_HEIGHT + 6 {
        HERO_HEIGHT
    } else {
        0
    };

    let [hero, filter_bar, listing] = Layout::vertical([
        Constraint::Length(hero_height),
        Constraint::Length(FILTER_BAR_HEIGHT),
        Constraint::Min(1),
    ])
    .areas(body);

    HomeAreas {
        hero,
        filter_bar,
        listing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.footer.y, 23);
        assert_eq!(layout.footer.height, 1);
    }

    #[test]
    fn test_home_layout_with_hero() {
        let body = Rect::new(0, 3, 80, 20);
        let home = home(body);

        assert_eq!(home.hero.height, 4);
        assert_eq!(home.filter_bar.y, 7);
        assert_eq!(home.listing.y, 9);
        assert_eq!(home.listing.height, 14);
    }

    #[test]
    fn test_home_layout_drops_hero_when_short() {
        let body = Rect::new(0, 3, 80, 10);
        let home = home(body);

        assert_eq!(home.hero.height, 0);
        assert_eq!(home.filter_bar.y, 3);
        assert_eq!(home.listing.height, 8);
    }
}
