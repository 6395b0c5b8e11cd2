//! Status bar widget
//!
//! Upload state, current slide, the latest notice and key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sharetrace_app::phone::PhoneScreen;
use sharetrace_app::state::{AppState, UiMode};
use sharetrace_core::UploadState;

use crate::theme::styles;

/// One-row status bar along the bottom of the screen
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn state_indicator(&self) -> Span<'static> {
        let upload = self.state.upload_state();
        let style = match upload {
            UploadState::Complete => styles::status_green(),
            UploadState::Uploading => styles::accent(),
            _ => styles::text_secondary(),
        };
        let icon = if upload.is_active() { "●" } else { "○" };
        Span::styled(format!("{} {}", icon, upload.label()), style)
    }

    fn slide_position(&self) -> Span<'static> {
        let viewport = self.state.narrative.viewport();
        Span::styled(
            format!(
                "Slide {}/{}",
                viewport.active_slide() + 1,
                viewport.slide_count()
            ),
            styles::text_muted(),
        )
    }

    /// (key, action) pairs for the current mode and phone screen
    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.ui_mode {
            UiMode::FilePrompt => vec![("Enter", "open"), ("Esc", "cancel")],
            UiMode::CaptionInput => vec![("Enter", "done")],
            UiMode::Normal => {
                let mut hints = match self.state.phone.screen() {
                    PhoneScreen::Feed => vec![("n", "new post")],
                    PhoneScreen::Gallery => vec![("s", "share"), ("c", "caption"), ("x", "cancel")],
                    PhoneScreen::Uploading => vec![("r", "reset")],
                };
                hints.extend([("j/k", "scroll"), ("1-8", "slide"), ("q", "quit")]);
                hints
            }
        }
    }

    fn build_left(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", styles::border_inactive());

        let mut segments = vec![Span::raw(" "), self.state_indicator()];
        segments.push(separator.clone());
        segments.push(self.slide_position());

        if self.state.loading_image {
            segments.push(separator.clone());
            segments.push(Span::styled("Loading image…", styles::accent()));
        } else if let Some(notice) = &self.state.notice {
            segments.push(separator);
            segments.push(Span::styled(notice.text.clone(), styles::notice(notice.level)));
        }
        segments
    }

    fn build_right(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (key, action) in self.key_hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let left = Line::from(self.build_left());
        let left_width = left.width() as u16;
        Paragraph::new(left).render(area, buf);

        if self.state.settings.ui.show_key_hints {
            let right = Line::from(self.build_right());
            // Hints yield to the notice when space runs out
            if left_width + right.width() as u16 + 2 <= area.width {
                Paragraph::new(right.right_aligned()).render(area, buf);
            }
        }
    }
}
