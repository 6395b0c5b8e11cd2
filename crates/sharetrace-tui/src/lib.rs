//! sharetrace-tui - Terminal UI for sharetrace
//!
//! This crate provides the ratatui-based terminal interface: the phone on the
//! left, the scrolling network story on the right, event polling and the
//! main loop driving the TEA state from sharetrace-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
