//! Popcorn theme for cinetui
//!
//! Color palette and style helpers for the TUI.
//! Charcoal panels, violet accents, yellow stars.

use ratatui::style::{Color, Modifier, Style};

/// Color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #212529
    pub const BACKGROUND: Color = Color::Rgb(0x21, 0x25, 0x29);

    /// Panels: #2b3035
    pub const PANEL: Color = Color::Rgb(0x2b, 0x30, 0x35);

    /// Raised panel / hover: #343a40
    pub const PANEL_LIGHT: Color = Color::Rgb(0x34, 0x3a, 0x40);

    /// Primary: #6741d9 (violet)
    pub const PRIMARY: Color = Color::Rgb(0x67, 0x41, 0xd9);

    /// Primary light: #7950f2
    pub const PRIMARY_LIGHT: Color = Color::Rgb(0x79, 0x50, 0xf2);

    /// Text: #dee2e6
    pub const TEXT: Color = Color::Rgb(0xde, 0xe2, 0xe6);

    /// Secondary text: #adb5bd
    pub const TEXT_DARK: Color = Color::Rgb(0xad, 0xb5, 0xbd);

    /// Stars: #fcc419
    pub const STAR: Color = Color::Rgb(0xfc, 0xc4, 0x19);

    /// Error: #fa5252
    pub const ERROR: Color = Color::Rgb(0xfa, 0x52, 0x52);

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PANEL)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::TEXT_DARK)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    /// Logo and header accents
    pub fn brand() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected list row
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::PANEL_LIGHT)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PRIMARY)
    }

    pub fn keybind() -> Style {
        Style::default().fg(Self::STAR)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PANEL_LIGHT)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn star() -> Style {
        Style::default().fg(Self::STAR)
    }

    pub fn star_empty() -> Style {
        Style::default().fg(Self::TEXT_DARK)
    }

    pub fn year() -> Style {
        Style::default().fg(Self::TEXT_DARK)
    }

    /// Numbers in the watched summary
    pub fn stat() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }
}
