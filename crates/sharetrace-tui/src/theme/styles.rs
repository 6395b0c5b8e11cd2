//! Semantic style builders.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use sharetrace_app::state::NoticeLevel;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bold() -> Style {
    text_primary().add_modifier(Modifier::BOLD)
}

/// Spaced-out uppercase labels above headlines and inside cards
pub fn kicker() -> Style {
    text_muted().add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn share_button() -> Style {
    Style::default()
        .fg(palette::SHARE_BLUE)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn notice(level: NoticeLevel) -> Style {
    match level {
        NoticeLevel::Info => text_secondary(),
        NoticeLevel::Error => status_red(),
    }
}

// --- Progress ---
pub fn progress_gauge() -> Style {
    Style::default()
        .fg(palette::PROGRESS_FILL)
        .bg(palette::PROGRESS_TRACK)
}

// --- Timeline ---
pub fn timeline_dot(active: bool) -> Style {
    if active {
        Style::default()
            .fg(palette::DOT_ACTIVE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::DOT_IDLE)
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Card holding one step of the story
pub fn card_block(title: &str) -> Block<'_> {
    glass_block(false)
        .title(title)
        .title_style(kicker())
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette::CARD_BG))
}

/// Text inside code and byte dump panels
pub fn code(color: Color) -> Style {
    Style::default().fg(color).bg(palette::CODE_BG)
}

pub fn phone_frame() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(palette::PHONE_FRAME))
        .style(Style::default().bg(palette::PHONE_SCREEN_BG))
}

pub fn modal_block(title: &str) -> Block<'_> {
    glass_block(true)
        .title(title)
        .title_style(accent().add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette::POPUP_BG))
}
