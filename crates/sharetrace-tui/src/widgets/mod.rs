//! Custom widget components

mod file_prompt;
pub mod narrative;
mod phone;
mod status_bar;

pub use file_prompt::FilePrompt;
pub use narrative::{NarrativeView, SlideView};
pub use phone::{truncate_to_width, PhoneView};
pub use status_bar::StatusBar;
