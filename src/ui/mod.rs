//! Terminal User Interface module.
//!
//! Renders the category tabs, the result card and the status bar, and
//! dispatches key presses to `App`. The UI holds no selection logic of its
//! own.
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `render` - Layout and overlay dispatch
//! - `tabs` - Category tab rows
//! - `card` - Result card widget
//! - `help` - Keybinding help overlay
//! - `status` - Status bar widget

mod card;
mod help;
mod input;
mod loop_runner;
mod render;
mod status;
mod tabs;

// Re-export the public API
pub use input::handle_input;
pub use loop_runner::{run, Action};
