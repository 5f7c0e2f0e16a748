//! Color palette: warm paper, near-black ink, one brick accent.

use ratatui::style::Color;

// --- Background layers ---
pub const PAPER: Color = Color::Rgb(242, 240, 235); // Page background
pub const PAPER_RAISED: Color = Color::Rgb(250, 249, 246); // Modal background

// --- Ink ---
pub const INK: Color = Color::Rgb(42, 42, 42); // Primary text
pub const INK_MUTED: Color = Color::Rgb(120, 118, 112); // ink/60
pub const INK_FAINT: Color = Color::Rgb(170, 167, 160); // ink/40

// --- Lines ---
pub const LINE: Color = Color::Rgb(200, 197, 190); // Hairline borders

// --- Accent ---
pub const BRICK: Color = Color::Rgb(166, 75, 42);
