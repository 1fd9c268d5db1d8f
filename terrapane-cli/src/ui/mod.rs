//! Terminal UI for Terrapane.
//!
//! The map canvas plus the search, status, and error widgets composed by the
//! TUI event loop.

pub mod map_view;
pub mod widgets;

pub use map_view::TerminalMap;
