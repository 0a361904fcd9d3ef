//! Render functions for the TUI.
//!
//! Lays out header, tabs, result card, footer and status bar, then draws
//! the help overlay on top when it is open.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{card, help, status, tabs};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 14;

const TITLE: &str = "♥ Couple's Conversation Starters";
const SUBTITLE: &str = "Generate random topics to spark meaningful conversations with your partner";
const FOOTER: &str = "Switch through categories and generate topics to deepen your connection";

/// Main render dispatch function.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let tab_height = tabs::height(app);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(tab_height),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    tabs::render(f, app, chunks[1]);
    card::render(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);
    status::render(f, app, chunks[4]);

    if app.show_help {
        help::render(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(TITLE, app.style("header_title"))),
        Line::from(Span::styled(SUBTITLE, app.style("header_subtitle"))),
    ];
    let header = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let footer = Paragraph::new(Span::styled(FOOTER, app.style("footer")))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
