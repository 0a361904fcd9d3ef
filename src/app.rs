use crate::catalog::Catalog;
use crate::keybindings::KeybindingRegistry;
use crate::selector::{self, History, RandomSource, SelectError};
use crate::theme::{StyleMap, ThemeVariant};
use ratatui::style::Style;
use std::borrow::Cow;
use tokio::time::Instant;

/// How long a status message stays visible.
const STATUS_TTL_SECS: u64 = 3;

// ============================================================================
// Result Card
// ============================================================================

/// What the result card currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardState {
    /// Nothing generated yet.
    Prompt,
    /// A topic, with the category key it was generated under.
    Shown { topic: String, category: String },
    /// The last generate found no topics for this category.
    Empty { category: String },
}

// ============================================================================
// Application State
// ============================================================================

/// Session state for the interactive UI.
///
/// Owns the single selection history for the session. History is only
/// replaced by the result of `selector::pick`; switching categories never
/// touches it.
pub struct App {
    pub catalog: Catalog,
    history: History,
    /// Index into `catalog.options()`.
    selected: usize,
    pub card: CardState,
    rng: Box<dyn RandomSource>,

    pub keybindings: KeybindingRegistry,
    pub theme_variant: ThemeVariant,
    theme: StyleMap,

    pub show_help: bool,
    pub help_scroll_offset: usize,
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(catalog: Catalog, rng: Box<dyn RandomSource>) -> Self {
        let theme_variant = ThemeVariant::Dark;
        Self {
            catalog,
            history: History::new(),
            selected: 0,
            card: CardState::Prompt,
            rng,
            keybindings: KeybindingRegistry::new(),
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            show_help: false,
            help_scroll_offset: 0,
            status_message: None,
            needs_redraw: true,
        }
    }

    // ------------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------------

    /// Filter options in tab order (`"all"` first).
    pub fn options(&self) -> Vec<&str> {
        self.catalog.options()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Key of the active category filter.
    pub fn active_key(&self) -> &str {
        self.catalog
            .options()
            .get(self.selected)
            .copied()
            .unwrap_or(crate::catalog::ALL_KEY)
    }

    pub fn active_name(&self) -> &str {
        self.catalog.display_name(self.active_key())
    }

    /// Select a tab by index. Does not produce a topic.
    ///
    /// Returns false (and changes nothing) for an out-of-range index.
    pub fn select_category(&mut self, idx: usize) -> bool {
        if idx >= self.option_count() {
            return false;
        }
        self.selected = idx;
        tracing::debug!(category = %self.active_key(), "Category selected");
        true
    }

    /// Select a tab by key. Returns false if the key is not an option.
    pub fn select_key(&mut self, key: &str) -> bool {
        match self.catalog.options().iter().position(|k| *k == key) {
            Some(idx) => self.select_category(idx),
            None => false,
        }
    }

    pub fn next_category(&mut self) {
        let count = self.option_count();
        self.select_category((self.selected + 1) % count);
    }

    pub fn prev_category(&mut self) {
        let count = self.option_count();
        self.select_category((self.selected + count - 1) % count);
    }

    fn option_count(&self) -> usize {
        // "all" is always present
        self.catalog.categories().len() + 1
    }

    // ------------------------------------------------------------------------
    // Generation
    // ------------------------------------------------------------------------

    /// Pick a topic for the active category and show it on the card.
    ///
    /// An empty category leaves history as it was and switches the card to
    /// the neutral empty state.
    pub fn generate(&mut self) {
        let category = self.active_key().to_string();
        match selector::pick(&self.catalog, &category, &self.history, self.rng.as_mut()) {
            Ok(pick) => {
                if pick.reset {
                    self.set_status("Every topic shown, starting over");
                }
                self.history = pick.history;
                self.card = CardState::Shown {
                    topic: pick.topic,
                    category,
                };
            }
            Err(SelectError::NoTopicsAvailable { category }) => {
                tracing::warn!(category = %category, "No topics available");
                self.set_status(format!(
                    "No topics available in {}",
                    self.catalog.display_name(&category)
                ));
                self.card = CardState::Empty { category };
            }
        }
        self.needs_redraw = true;
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // ------------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------------

    /// Resolve a semantic style role for the current theme.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    /// Switch to a different theme variant at runtime.
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant, returning its name.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    // ------------------------------------------------------------------------
    // Status
    // ------------------------------------------------------------------------

    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired.
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
