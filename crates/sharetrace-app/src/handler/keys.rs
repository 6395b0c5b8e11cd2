//! Key event handlers for UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::phone::PhoneScreen;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::FilePrompt => handle_key_file_prompt(key),
        UiMode::CaptionInput => handle_key_caption(key),
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let screen = state.phone.screen();
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('q') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Phone
        // ─────────────────────────────────────────────────────────
        InputKey::Char('n') | InputKey::Char('+') => Some(Message::OpenFilePrompt),
        InputKey::Char('s') if screen == PhoneScreen::Gallery => Some(Message::StartUpload),
        InputKey::Char('c') if screen == PhoneScreen::Gallery => Some(Message::StartCaptionEdit),
        InputKey::Char('x') | InputKey::Esc if screen == PhoneScreen::Gallery => {
            Some(Message::CancelPost)
        }
        InputKey::Char('r') => Some(Message::ResetPhone),

        // ─────────────────────────────────────────────────────────
        // Narrative
        // ─────────────────────────────────────────────────────────
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollBy(1)),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollBy(-1)),
        InputKey::PageDown | InputKey::Char(' ') | InputKey::Right => Some(Message::NextSlide),
        InputKey::PageUp | InputKey::Left => Some(Message::PreviousSlide),
        InputKey::Char('g') | InputKey::Home => Some(Message::FirstSlide),
        InputKey::Char('G') | InputKey::End => Some(Message::LastSlide),
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).unwrap_or(1) as usize - 1;
            Some(Message::JumpToSlide(index))
        }

        _ => None,
    }
}

fn handle_key_file_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Enter => Some(Message::FilePromptSubmit),
        InputKey::Esc => Some(Message::FilePromptCancel),
        InputKey::Backspace => Some(Message::FilePromptBackspace),
        InputKey::Char(c) => Some(Message::FilePromptInput(c)),
        _ => None,
    }
}

fn handle_key_caption(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Enter | InputKey::Esc | InputKey::Tab => Some(Message::FinishCaptionEdit),
        InputKey::Backspace => Some(Message::CaptionBackspace),
        InputKey::Char(c) => Some(Message::CaptionInput(c)),
        _ => None,
    }
}
