//! Keybinding registry — maps actions to key events with config overrides.
//!
//! Default bindings live here; users override them through the
//! `[keybindings]` table in config.toml.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Generate,
    NextCategory,
    PrevCategory,
    CycleTheme,
    ShowHelp,
    CloseHelp,
    ScrollDown,
    ScrollUp,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::Generate => "Generate a topic",
            Self::NextCategory => "Next category",
            Self::PrevCategory => "Previous category",
            Self::CycleTheme => "Cycle theme",
            Self::ShowHelp => "Show help",
            Self::CloseHelp => "Close help",
            Self::ScrollDown => "Scroll down one line",
            Self::ScrollUp => "Scroll up one line",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context — determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    Help,
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "g", "?"
/// - Named keys: "Enter", "Esc", "Tab", "Shift+Tab", "Left", "Right", "Space"
/// - Modifier combos: "Ctrl+q"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let rest = rest.trim();
        if rest.len() == 1 {
            let c = rest.chars().next()?;
            return Some(KeySpec::ctrl(c));
        }
        return None;
    }

    // Named keys (case-insensitive)
    match s.to_lowercase().as_str() {
        "enter" | "return" => return Some(KeySpec::plain(KeyCode::Enter)),
        "esc" | "escape" => return Some(KeySpec::plain(KeyCode::Esc)),
        "tab" => return Some(KeySpec::plain(KeyCode::Tab)),
        "shift+tab" | "backtab" => return Some(KeySpec::plain(KeyCode::BackTab)),
        "up" => return Some(KeySpec::plain(KeyCode::Up)),
        "down" => return Some(KeySpec::plain(KeyCode::Down)),
        "left" => return Some(KeySpec::plain(KeyCode::Left)),
        "right" => return Some(KeySpec::plain(KeyCode::Right)),
        "backspace" => return Some(KeySpec::plain(KeyCode::Backspace)),
        "space" => return Some(KeySpec::plain(KeyCode::Char(' '))),
        _ => {}
    }

    // Function keys
    if s.starts_with('F') || s.starts_with('f') {
        if let Ok(n) = s[1..].parse::<u8>() {
            if (1..=12).contains(&n) {
                return Some(KeySpec::plain(KeyCode::F(n)));
            }
        }
    }

    // Single character
    if s.chars().count() == 1 {
        let c = s.chars().next()?;
        return Some(KeySpec::plain(KeyCode::Char(c)));
    }

    None
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// The same key can map to different actions in different contexts;
/// lookups fall back to `Global` when the context has no binding.
pub struct KeybindingRegistry {
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings in registration order, for the help screen.
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    /// Create a registry with the default bindings.
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    fn register_defaults(&mut self) {
        use KeyCode::*;

        // === Global ===
        self.bind(Context::Global, KeySpec::plain(Char('q')), Action::Quit);
        self.bind(Context::Global, KeySpec::plain(Esc), Action::Quit);

        self.bind(Context::Global, KeySpec::plain(Enter), Action::Generate);
        self.bind(Context::Global, KeySpec::plain(Char(' ')), Action::Generate);
        self.bind(Context::Global, KeySpec::plain(Char('g')), Action::Generate);

        self.bind(Context::Global, KeySpec::plain(Right), Action::NextCategory);
        self.bind(Context::Global, KeySpec::plain(Char('l')), Action::NextCategory);
        self.bind(Context::Global, KeySpec::plain(Tab), Action::NextCategory);
        self.bind(Context::Global, KeySpec::plain(Left), Action::PrevCategory);
        self.bind(Context::Global, KeySpec::plain(Char('h')), Action::PrevCategory);
        self.bind(Context::Global, KeySpec::plain(BackTab), Action::PrevCategory);

        self.bind(Context::Global, KeySpec::plain(Char('T')), Action::CycleTheme);
        self.bind(Context::Global, KeySpec::plain(Char('?')), Action::ShowHelp);

        // === Help overlay ===
        self.bind(Context::Help, KeySpec::plain(Esc), Action::CloseHelp);
        self.bind(Context::Help, KeySpec::plain(Char('q')), Action::CloseHelp);
        self.bind(Context::Help, KeySpec::plain(Char('?')), Action::CloseHelp);
        self.bind(Context::Help, KeySpec::plain(Char('j')), Action::ScrollDown);
        self.bind(Context::Help, KeySpec::plain(Down), Action::ScrollDown);
        self.bind(Context::Help, KeySpec::plain(Char('k')), Action::ScrollUp);
        self.bind(Context::Help, KeySpec::plain(Up), Action::ScrollUp);
    }

    /// Apply user overrides from config keybindings map.
    ///
    /// Keys in the map are action names (e.g., "quit", "generate").
    /// Values are key strings (e.g., "q", "Ctrl+q", "F5"). An override
    /// replaces every default key of that action, in each context where
    /// the action was bound.
    ///
    /// Returns a list of warnings for unrecognized action names, unparseable
    /// keys, and keys taken over from another action.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let action = match parse_action_name(action_name) {
                Some(a) => a,
                None => {
                    warnings.push(format!("Unknown action '{}', ignoring", action_name));
                    continue;
                }
            };

            let key = match parse_key_string(key_str) {
                Some(k) => k,
                None => {
                    warnings.push(format!(
                        "Cannot parse key '{}' for action '{}', ignoring",
                        key_str, action_name
                    ));
                    continue;
                }
            };

            let mut contexts_for_action: Vec<Context> = self
                .bindings
                .iter()
                .filter(|(_, _, a)| *a == action)
                .map(|(c, _, _)| *c)
                .collect();
            contexts_for_action.dedup();

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            for ctx in contexts_for_action {
                if let Some(&displaced) = self.lookup.get(&(ctx, key)) {
                    warnings.push(format!(
                        "Key '{}' for action '{}' replaces its binding to '{}'",
                        key_str,
                        action_name,
                        displaced.describe()
                    ));
                    self.bindings.retain(|(c, k, _)| !(*c == ctx && *k == key));
                }
                self.bind(ctx, key, action);
            }

            tracing::info!(
                action = %action_name,
                key = %key_str,
                "Applied keybinding override"
            );
        }

        warnings
    }

    /// Look up the action for a given key in a given context.
    ///
    /// Tries the specific context first, then falls back to Global.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        // Shift is already encoded in the char ('T') or the code (BackTab)
        let key = KeySpec::new(code, modifiers.difference(KeyModifiers::SHIFT));

        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }

        if context != Context::Global {
            if let Some(&action) = self.lookup.get(&(Context::Global, key)) {
                return Some(action);
            }
        }

        None
    }

    /// Get all bindings for the help screen.
    ///
    /// Returns (context, key_display_string, action, description) tuples.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "generate" | "shuffle" => Some(Action::Generate),
        "next_category" | "nextcategory" | "next" => Some(Action::NextCategory),
        "prev_category" | "prevcategory" | "prev" | "previous" => Some(Action::PrevCategory),
        "cycle_theme" | "cycletheme" | "theme" => Some(Action::CycleTheme),
        "show_help" | "showhelp" | "help" => Some(Action::ShowHelp),
        "close_help" | "closehelp" => Some(Action::CloseHelp),
        "scroll_down" | "scrolldown" => Some(Action::ScrollDown),
        "scroll_up" | "scrollup" => Some(Action::ScrollUp),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_quit() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Global),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_generate_keys() {
        let reg = KeybindingRegistry::new();
        for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Char('g')] {
            assert_eq!(
                reg.action_for_key(code, KeyModifiers::NONE, Context::Global),
                Some(Action::Generate)
            );
        }
    }

    #[test]
    fn test_category_cycling_keys() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Right, KeyModifiers::NONE, Context::Global),
            Some(Action::NextCategory)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('h'), KeyModifiers::NONE, Context::Global),
            Some(Action::PrevCategory)
        );
    }

    #[test]
    fn test_shift_is_ignored_for_lookup() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('T'), KeyModifiers::SHIFT, Context::Global),
            Some(Action::CycleTheme)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::BackTab, KeyModifiers::SHIFT, Context::Global),
            Some(Action::PrevCategory)
        );
    }

    #[test]
    fn test_help_context_overrides_global() {
        let reg = KeybindingRegistry::new();
        // Esc quits globally, closes help in the overlay
        assert_eq!(
            reg.action_for_key(KeyCode::Esc, KeyModifiers::NONE, Context::Help),
            Some(Action::CloseHelp)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('j'), KeyModifiers::NONE, Context::Help),
            Some(Action::ScrollDown)
        );
    }

    #[test]
    fn test_help_falls_back_to_global() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('T'), KeyModifiers::NONE, Context::Help),
            Some(Action::CycleTheme)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::F(12), KeyModifiers::NONE, Context::Global),
            None
        );
    }

    #[test]
    fn test_apply_overrides_valid() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("generate".to_string(), "n".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert!(warnings.is_empty());

        assert_eq!(
            reg.action_for_key(KeyCode::Enter, KeyModifiers::NONE, Context::Global),
            None
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('n'), KeyModifiers::NONE, Context::Global),
            Some(Action::Generate)
        );
    }

    #[test]
    fn test_override_preserves_contexts() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("close_help".to_string(), "x".to_string());
        assert!(reg.apply_overrides(&overrides).is_empty());

        assert_eq!(
            reg.action_for_key(KeyCode::Char('x'), KeyModifiers::NONE, Context::Help),
            Some(Action::CloseHelp)
        );
        // Esc in help now falls back to the global Quit binding
        assert_eq!(
            reg.action_for_key(KeyCode::Esc, KeyModifiers::NONE, Context::Help),
            Some(Action::Quit)
        );
        let count = reg
            .all_bindings()
            .iter()
            .filter(|(_, _, a, _)| *a == Action::CloseHelp)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_override_taking_used_key_drops_old_binding() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("generate".to_string(), "q".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Quit application"));

        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Global),
            Some(Action::Generate)
        );
        let q_bindings: Vec<Action> = reg
            .all_bindings()
            .into_iter()
            .filter(|(ctx, key, _, _)| *ctx == Context::Global && key == "q")
            .map(|(_, _, action, _)| action)
            .collect();
        assert_eq!(q_bindings, vec![Action::Generate]);
        // Esc still quits
        assert_eq!(
            reg.action_for_key(KeyCode::Esc, KeyModifiers::NONE, Context::Global),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_apply_overrides_unknown_action() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("refresh_all".to_string(), "r".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Unknown action"));
    }

    #[test]
    fn test_apply_overrides_bad_key() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("quit".to_string(), "Ctrl+Alt+Shift+Q".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Cannot parse key"));
    }

    #[test]
    fn test_parse_key_string_named_keys() {
        assert_eq!(
            parse_key_string("Enter"),
            Some(KeySpec::plain(KeyCode::Enter))
        );
        assert_eq!(
            parse_key_string("Shift+Tab"),
            Some(KeySpec::plain(KeyCode::BackTab))
        );
        assert_eq!(
            parse_key_string("space"),
            Some(KeySpec::plain(KeyCode::Char(' ')))
        );
    }

    #[test]
    fn test_parse_key_string_function_keys() {
        assert_eq!(parse_key_string("F1"), Some(KeySpec::plain(KeyCode::F(1))));
        assert_eq!(parse_key_string("F0"), None);
        assert_eq!(parse_key_string("F13"), None);
    }

    #[test]
    fn test_parse_key_string_ctrl_and_char() {
        assert_eq!(parse_key_string("Ctrl+q"), Some(KeySpec::ctrl('q')));
        assert_eq!(
            parse_key_string("?"),
            Some(KeySpec::plain(KeyCode::Char('?')))
        );
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key(&KeySpec::plain(KeyCode::Char('q'))), "q");
        assert_eq!(format_key(&KeySpec::plain(KeyCode::Char(' '))), "Space");
        assert_eq!(format_key(&KeySpec::ctrl('q')), "Ctrl+q");
        assert_eq!(format_key(&KeySpec::plain(KeyCode::BackTab)), "Shift+Tab");
    }

    #[test]
    fn test_action_describe() {
        assert_eq!(Action::Generate.describe(), "Generate a topic");
        assert_eq!(Action::Quit.describe(), "Quit application");
    }
}
