//! Image path prompt (the phone's file picker)

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use sharetrace_app::state::FilePromptState;

use crate::theme::styles;

const PROMPT_WIDTH: u16 = 60;
const PROMPT_HEIGHT: u16 = 5;

/// Modal asking for the path of the image to post
pub struct FilePrompt<'a> {
    state: &'a FilePromptState,
}

impl<'a> FilePrompt<'a> {
    pub fn new(state: &'a FilePromptState) -> Self {
        Self { state }
    }

    /// Centered popup area within `area`
    pub fn popup_area(area: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(PROMPT_HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(PROMPT_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(row);
        popup
    }
}

impl Widget for FilePrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::popup_area(area);
        Clear.render(popup, buf);

        let block = styles::modal_block(" Select image ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        // Keep the end of long paths visible
        let width = inner.width.saturating_sub(3) as usize;
        let input = &self.state.input;
        let skip = input.chars().count().saturating_sub(width);
        let visible: String = input.chars().skip(skip).collect();

        let lines = vec![
            Line::from(vec![
                Span::styled("> ", styles::accent()),
                Span::styled(visible, styles::text_primary()),
                Span::styled("▏", styles::accent()),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" open  ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" cancel", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_prompt_shows_input() {
        let state = FilePromptState {
            input: "~/Pictures/cat.png".to_string(),
        };
        let mut term = TestTerminal::new();
        term.render_widget(FilePrompt::new(&state), term.area());
        assert!(term.buffer_contains("Select image"));
        assert!(term.buffer_contains("> ~/Pictures/cat.png▏"));
        assert!(term.buffer_contains("Enter open"));
    }

    #[test]
    fn test_long_input_keeps_tail() {
        let state = FilePromptState {
            input: format!("/{}/end.png", "x".repeat(200)),
        };
        let mut term = TestTerminal::new();
        term.render_widget(FilePrompt::new(&state), term.area());
        assert!(term.buffer_contains("end.png▏"));
    }

    #[test]
    fn test_popup_is_centered() {
        let popup = FilePrompt::popup_area(Rect::new(0, 0, 120, 40));
        assert_eq!(popup.width, PROMPT_WIDTH);
        assert_eq!(popup.height, PROMPT_HEIGHT);
        assert_eq!(popup.x, 30);
    }
}
