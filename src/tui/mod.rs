//! TUI (Terminal User Interface) module
//!
//! This module contains all TUI logic separated from the binary for better testability.
//! The binary only owns the terminal and the event loop.

pub mod types;
pub mod screens;
pub mod clipboard;
pub mod app;
pub mod ui;

// Re-export main types for convenience
pub use types::Focus;
pub use screens::UserListScreen;
pub use app::App;
