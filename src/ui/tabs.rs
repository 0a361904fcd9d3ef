use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Tabs per row, matching the two five-tab rows of the web layout.
const TABS_PER_ROW: usize = 5;

const DIVIDER: &str = "│";

/// How much of each tab label fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelMode {
    Name,
    Key,
    Number,
}

/// Most tab rows shown at once; larger catalogs scroll.
const MAX_VISIBLE_ROWS: usize = 8;

fn row_count(app: &App) -> usize {
    app.options().len().div_ceil(TABS_PER_ROW)
}

/// Height of the tab block, borders included.
pub fn height(app: &App) -> u16 {
    row_count(app).min(MAX_VISIBLE_ROWS) as u16 + 2
}

/// First row to draw so the row holding `selected` stays visible.
fn first_visible_row(selected: usize, visible_rows: usize) -> usize {
    (selected / TABS_PER_ROW).saturating_sub(visible_rows.saturating_sub(1))
}

/// Digit hotkey for a tab index, if it has one.
fn hotkey(idx: usize) -> Option<char> {
    match idx {
        0..=8 => char::from_digit(idx as u32 + 1, 10),
        9 => Some('0'),
        _ => None,
    }
}

fn label(app: &App, idx: usize, key: &str, mode: LabelMode) -> String {
    let text = match mode {
        LabelMode::Name => app.catalog.display_name(key),
        LabelMode::Key => key,
        LabelMode::Number => "",
    };
    match (hotkey(idx), text.is_empty()) {
        (Some(k), false) => format!(" {} {} ", k, text),
        (Some(k), true) => format!(" {} ", k),
        (None, _) => format!(" {} ", key),
    }
}

fn row_width(labels: &[String]) -> usize {
    labels.iter().map(|l| l.width()).sum::<usize>() + labels.len().saturating_sub(1)
}

/// Pick the most descriptive label mode where every row fits.
fn label_mode(app: &App, inner_width: usize) -> LabelMode {
    let options = app.options();
    for mode in [LabelMode::Name, LabelMode::Key] {
        let fits = options
            .chunks(TABS_PER_ROW)
            .enumerate()
            .all(|(row, keys)| {
                let labels: Vec<String> = keys
                    .iter()
                    .enumerate()
                    .map(|(i, key)| label(app, row * TABS_PER_ROW + i, key, mode))
                    .collect();
                row_width(&labels) <= inner_width
            });
        if fits {
            return mode;
        }
    }
    LabelMode::Number
}

/// Render the category tab rows.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let mode = label_mode(app, inner_width);
    let selected = app.selected_index();
    let style_selected = app.style("tab_selected");
    let style_normal = app.style("tab_normal");
    let style_divider = app.style("panel_border");

    let options = app.options();
    let lines: Vec<Line> = options
        .chunks(TABS_PER_ROW)
        .enumerate()
        .map(|(row, keys)| {
            let mut spans = Vec::with_capacity(keys.len() * 2);
            for (i, key) in keys.iter().enumerate() {
                let idx = row * TABS_PER_ROW + i;
                if i > 0 {
                    spans.push(Span::styled(DIVIDER, style_divider));
                }
                let style = if idx == selected {
                    style_selected
                } else {
                    style_normal
                };
                spans.push(Span::styled(label(app, idx, key, mode), style));
            }
            Line::from(spans)
        })
        .collect();

    let total_rows = lines.len();
    let visible_rows = area.height.saturating_sub(2) as usize;
    let first = first_visible_row(selected, visible_rows);
    let title = if total_rows > visible_rows {
        let last = (first + visible_rows).min(total_rows);
        format!(" Categories (rows {}-{} of {}) ", first + 1, last, total_rows)
    } else {
        " Categories ".to_string()
    };

    let tabs = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .scroll((first as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border"))
                .title(title),
        );
    f.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use crate::selector::ThreadRandom;

    fn test_app() -> App {
        App::new(Catalog::builtin(), Box::new(ThreadRandom))
    }

    #[test]
    fn test_hotkeys() {
        assert_eq!(hotkey(0), Some('1'));
        assert_eq!(hotkey(8), Some('9'));
        assert_eq!(hotkey(9), Some('0'));
        assert_eq!(hotkey(10), None);
    }

    #[test]
    fn test_label_modes() {
        let app = test_app();
        assert_eq!(label(&app, 0, "all", LabelMode::Name), " 1 All Topics ");
        assert_eq!(label(&app, 1, "deep", LabelMode::Key), " 2 deep ");
        assert_eq!(label(&app, 2, "sports", LabelMode::Number), " 3 ");
    }

    #[test]
    fn test_label_mode_degrades_with_width() {
        let app = test_app();
        assert_eq!(label_mode(&app, 200), LabelMode::Name);
        assert_eq!(label_mode(&app, 70), LabelMode::Key);
        assert_eq!(label_mode(&app, 10), LabelMode::Number);
    }

    #[test]
    fn test_first_visible_row_follows_selection() {
        assert_eq!(first_visible_row(0, 8), 0);
        assert_eq!(first_visible_row(39, 8), 0);
        assert_eq!(first_visible_row(40, 8), 1);
        assert_eq!(first_visible_row(45, 8), 2);
        assert_eq!(first_visible_row(12, 0), 2);
    }

    #[test]
    fn test_height_is_capped() {
        let categories = (0..45)
            .map(|i| Category::new(format!("k{i}"), format!("Name{i}"), ["t"]))
            .collect();
        let app = App::new(Catalog::from_categories(categories), Box::new(ThreadRandom));
        assert_eq!(height(&app), MAX_VISIBLE_ROWS as u16 + 2);
    }

    #[test]
    fn test_height_two_rows_for_builtin() {
        let app = test_app();
        assert_eq!(height(&app), 4);
    }
}
