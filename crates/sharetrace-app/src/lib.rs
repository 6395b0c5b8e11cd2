//! sharetrace-app - Application state and orchestration for sharetrace
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! phone simulator and the narrative stage: messages, the update function,
//! background actions (image loading, the upload ticker) and configuration.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod narrative;
pub mod phone;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use narrative::{DerivedPreviews, NarrativeStage, ScrollViewport};
pub use phone::{PhoneScreen, PhoneSimulator, UploadObserver};
pub use state::{AppState, NoticeLevel, UiMode};
