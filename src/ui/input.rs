//! Input handling for the TUI.
//!
//! Resolves key presses through the keybinding registry and applies the
//! resulting action to `App`.

use crate::app::App;
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

/// Main input dispatch function.
///
/// The help overlay captures all keys while visible.
pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    if app.show_help {
        handle_help_input(app, code, modifiers);
        return Action::Continue;
    }

    // Digits jump straight to a tab: 1..9 → first nine, 0 → tenth
    if let KeyCode::Char(c @ '0'..='9') = code {
        if modifiers.is_empty() {
            let idx = match c {
                '0' => 9,
                d => d as usize - '1' as usize,
            };
            app.select_category(idx);
            return Action::Continue;
        }
    }

    match app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Global)
    {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::Generate) => app.generate(),
        Some(KbAction::NextCategory) => app.next_category(),
        Some(KbAction::PrevCategory) => app.prev_category(),
        Some(KbAction::CycleTheme) => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        Some(KbAction::ShowHelp) => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        Some(KbAction::CloseHelp | KbAction::ScrollDown | KbAction::ScrollUp) | None => {}
    }

    Action::Continue
}

/// Handle input while the help overlay is visible.
fn handle_help_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Help)
    {
        Some(KbAction::CloseHelp) => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        Some(KbAction::ScrollDown) => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        Some(KbAction::ScrollUp) => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        Some(KbAction::CycleTheme) => {
            app.cycle_theme();
        }
        _ => {}
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CardState;
    use crate::catalog::Catalog;
    use crate::selector::ScriptedRandom;

    fn test_app() -> App {
        App::new(Catalog::builtin(), Box::new(ScriptedRandom::fixed(0)))
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_input(app, code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), Action::Quit);
    }

    #[test]
    fn test_digits_jump_to_tabs() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_key(), "deep");
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.active_key(), "childhood");
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_key(), "all");
    }

    #[test]
    fn test_enter_generates_for_active_tab() {
        let mut app = test_app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        match &app.card {
            CardState::Shown { category, .. } => assert_eq!(category, "deep"),
            other => panic!("unexpected card state: {:?}", other),
        }
        assert_eq!(app.history().len(), 1);
    }

    #[test]
    fn test_switching_tabs_keeps_card() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        let before = app.card.clone();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.card, before);
    }

    #[test]
    fn test_help_captures_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        // Quit key closes help instead of quitting
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Continue);
        assert!(!app.show_help);
    }

    #[test]
    fn test_help_scroll_saturates() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.help_scroll_offset, 0);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.help_scroll_offset, 2);
    }

    #[test]
    fn test_generate_ignored_while_help_open() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Enter);
        assert!(app.history().is_empty());
    }

    #[test]
    fn test_shifted_theme_key() {
        let mut app = test_app();
        handle_input(&mut app, KeyCode::Char('T'), KeyModifiers::SHIFT);
        assert!(app.status_message.is_some());
    }
}
