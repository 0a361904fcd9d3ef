//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header --
    pub header_title: Style,
    pub header_subtitle: Style,

    // -- Category tabs --
    pub tab_normal: Style,
    pub tab_selected: Style,

    // -- Result card --
    pub card_border: Style,
    pub card_badge: Style,
    pub card_topic: Style,
    pub card_placeholder: Style,
    pub card_empty: Style,

    // -- Chrome --
    pub footer: Style,
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,

    // -- Help overlay --
    pub help_heading: Style,
    pub help_body: Style,
    pub help_hint: Style,
}

impl ColorPalette {
    /// Dark palette — pink accents on the terminal background.
    fn dark() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
            header_subtitle: Style::default().fg(Color::Gray),

            tab_normal: Style::default().fg(Color::Gray),
            tab_selected: Style::default()
                .bg(Color::Magenta)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            card_border: Style::default().fg(Color::LightMagenta),
            card_badge: Style::default().bg(Color::LightMagenta).fg(Color::Black),
            card_topic: Style::default().add_modifier(Modifier::BOLD),
            card_placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            card_empty: Style::default().fg(Color::Yellow),

            footer: Style::default().fg(Color::DarkGray),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Magenta),

            help_heading: Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
            help_body: Style::default(),
            help_hint: Style::default().fg(Color::DarkGray),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            header_subtitle: Style::default().fg(Color::DarkGray),

            tab_normal: Style::default().fg(Color::Black),
            tab_selected: Style::default()
                .bg(Color::Magenta)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            card_border: Style::default().fg(Color::Magenta),
            card_badge: Style::default().bg(Color::Magenta).fg(Color::White),
            card_topic: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            card_empty: Style::default().fg(Color::Red),

            footer: Style::default().fg(Color::DarkGray),
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Magenta),

            help_heading: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            help_body: Style::default().fg(Color::Black),
            help_hint: Style::default().fg(Color::DarkGray),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup.
///
/// Built from a `ColorPalette`, this allows resolving role names (e.g.
/// `"card_badge"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 16] = [
    "header_title",
    "header_subtitle",
    "tab_normal",
    "tab_selected",
    "card_border",
    "card_badge",
    "card_topic",
    "card_placeholder",
    "card_empty",
    "footer",
    "status_bar",
    "panel_border",
    "panel_border_focused",
    "help_heading",
    "help_body",
    "help_hint",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 16] = [
            p.header_title,
            p.header_subtitle,
            p.tab_normal,
            p.tab_selected,
            p.card_border,
            p.card_badge,
            p.card_topic,
            p.card_placeholder,
            p.card_empty,
            p.footer,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
            p.help_heading,
            p.help_body,
            p.help_hint,
        ];

        let map = ROLE_NAMES
            .iter()
            .copied()
            .zip(styles.iter().copied())
            .collect();

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
