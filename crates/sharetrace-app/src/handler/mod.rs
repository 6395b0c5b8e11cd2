//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `upload`: Image picking, Share, ticker and reset handlers
//! - `scroll`: Narrative scroll handlers

pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;
pub(crate) mod upload;


use std::path::PathBuf;
use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Read and encode an image file in the background
    LoadImage { path: PathBuf },

    /// Start the simulated progress ticker for an upload cycle
    StartTicker {
        cycle: u64,
        interval: Duration,
        max_increment: f64,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
