//! Conversation-starter picker.
//!
//! The selection core (`catalog` + `selector`) has no terminal
//! dependencies; `app` and `ui` wrap it in an interactive session.

pub mod app;
pub mod catalog;
pub mod config;
pub mod keybindings;
pub mod selector;
pub mod theme;
pub mod ui;
