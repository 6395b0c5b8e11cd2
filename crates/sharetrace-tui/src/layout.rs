//! Screen layout definitions for the TUI
//!
//! The phone takes a quarter of the width on the left, the narrative the
//! rest. A one-row status bar runs along the bottom.

use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Narrowest phone column that still fits the mock screens
pub const MIN_PHONE_WIDTH: u16 = 24;

/// Rows of the story header (kicker, two headline rows, intro)
pub const STORY_HEADER_HEIGHT: u16 = 4;

/// Below this inner height the story header is dropped
const MIN_HEIGHT_FOR_HEADER: u16 = 16;

/// Width of the slide timeline column
pub const TIMELINE_WIDTH: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Left column: the phone simulator
    pub phone: Rect,

    /// Right column: the scrolling story
    pub narrative: Rect,

    /// Bottom row: notices and key hints
    pub status: Rect,
}

/// Split the terminal into phone, narrative and status areas
pub fn create(area: Rect) -> ScreenAreas {
    let [body, status] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let phone_width = (body.width / 4).max(MIN_PHONE_WIDTH).min(body.width);
    let [phone, narrative] =
        Layout::horizontal([Constraint::Length(phone_width), Constraint::Min(0)]).areas(body);

    ScreenAreas {
        phone,
        narrative,
        status,
    }
}

/// Areas inside the narrative column
#[derive(Debug, Clone, Copy)]
pub struct NarrativeAreas {
    pub header: Rect,
    pub timeline: Rect,
    /// One slide panel; its height is the scroll snap unit
    pub viewport: Rect,
}

/// Split the (bordered) narrative column
pub fn narrative(area: Rect) -> NarrativeAreas {
    let inner = area.inner(Margin::new(1, 1));
    let header_height = if inner.height >= MIN_HEIGHT_FOR_HEADER {
        STORY_HEADER_HEIGHT + 1
    } else {
        0
    };
    let [header, body] =
        Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).areas(inner);
    let [timeline, viewport] =
        Layout::horizontal([Constraint::Length(TIMELINE_WIDTH), Constraint::Min(0)]).areas(body);

    NarrativeAreas {
        header: Rect {
            height: header.height.min(STORY_HEADER_HEIGHT),
            ..header
        },
        timeline,
        viewport,
    }
}
