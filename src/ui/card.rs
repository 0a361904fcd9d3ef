use crate::app::{App, CardState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const BUTTON: &str = " ⇄ Generate Topic (Enter) ";
const PROMPT: &str = "Press Enter to generate a topic";
const EMPTY: &str = "No topics available";

/// Render the generate button and the result card below it.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let button = Paragraph::new(Span::styled(BUTTON, app.style("tab_selected")))
        .alignment(Alignment::Center);
    f.render_widget(button, chunks[0]);

    let lines = card_lines(app);
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("card_border")),
        );
    f.render_widget(card, chunks[2]);
}

fn card_lines(app: &App) -> Vec<Line<'_>> {
    match &app.card {
        CardState::Prompt => vec![
            Line::from(""),
            Line::from(Span::styled(PROMPT, app.style("card_placeholder"))),
        ],
        CardState::Shown { topic, category } => vec![
            Line::from(Span::styled(
                format!(" {} ", app.catalog.display_name(category)),
                app.style("card_badge"),
            )),
            Line::from(""),
            Line::from(Span::styled(topic.as_str(), app.style("card_topic"))),
        ],
        CardState::Empty { category } => vec![
            Line::from(""),
            Line::from(Span::styled(EMPTY, app.style("card_empty"))),
            Line::from(Span::styled(
                format!("{} has nothing to pick from", app.catalog.display_name(category)),
                app.style("card_placeholder"),
            )),
        ],
    }
}
