//! Narrative stage widget
//!
//! Renders the story header, the slide timeline and the scrolling slide
//! column. Slides are stacked one viewport apart; the viewport offset picks
//! which rows of which slides are visible.

mod slide;

pub use slide::SlideView;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use sharetrace_app::NarrativeStage;
use sharetrace_core::slides::{STORY_HEADLINE, STORY_INTRO, STORY_KICKER};
use sharetrace_core::SLIDES;

use crate::layout;
use crate::theme::styles;

/// The right-hand story column
pub struct NarrativeView<'a> {
    stage: &'a NarrativeStage,
    caption: &'a str,
}

impl<'a> NarrativeView<'a> {
    pub fn new(stage: &'a NarrativeStage) -> Self {
        Self { stage, caption: "" }
    }

    /// Caption carried into the payload preview
    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = caption;
        self
    }
}

impl Widget for NarrativeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        block.render(area, buf);

        let areas = layout::narrative(area);
        self.render_header(areas.header, buf);
        self.render_timeline(areas.timeline, buf);
        self.render_slides(areas.viewport, buf);
    }
}

impl NarrativeView<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let progress = format!(
            "{} · {}%",
            self.stage.status_label(),
            self.stage.synced_progress().round() as u32
        );
        Paragraph::new(Line::from(Span::styled(STORY_KICKER, styles::kicker())))
            .render(area, buf);
        Paragraph::new(Line::from(Span::styled(progress, styles::accent())).right_aligned())
            .render(area, buf);

        let lines = vec![
            Line::default(),
            Line::styled(STORY_HEADLINE, styles::text_bold()),
            Line::styled(STORY_INTRO, styles::text_muted()),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    /// A dot per slide; the active one is filled
    fn render_timeline(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let active = self.stage.active_slide();
        let count = SLIDES.len() as u16;
        let spacing = (area.height / count.max(1)).max(1);

        for row in 0..area.height {
            let index = row / spacing;
            let on_dot = row % spacing == 0 && index < count;
            let (symbol, style) = if on_dot {
                let is_active = usize::from(index) == active;
                (if is_active { "●" } else { "○" }, styles::timeline_dot(is_active))
            } else if index < count && row < (count - 1) * spacing {
                ("│", styles::border_inactive())
            } else {
                continue;
            };
            buf.set_string(area.x + area.width / 2, area.y + row, symbol, style);
        }
    }

    /// Draw the rows of every slide that intersects the viewport
    fn render_slides(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let height = u32::from(area.height);
        let offset = self.stage.viewport().offset();
        let first = (offset / height) as usize;
        let last = ((offset + height - 1) / height) as usize;

        for (index, slide) in SLIDES
            .iter()
            .enumerate()
            .take(last + 1)
            .skip(first)
        {
            let slide_top = index as i64 * i64::from(height) - i64::from(offset);
            let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, area.height));
            SlideView::new(index, slide, self.stage, self.caption).render(scratch.area, &mut scratch);
            blit_rows(&scratch, slide_top, area, buf);
        }
    }
}

/// Copy `src` into `area`, shifted down by `top` rows and clipped
fn blit_rows(src: &Buffer, top: i64, area: Rect, dst: &mut Buffer) {
    for y in 0..src.area.height {
        let row = top + i64::from(y);
        if row < 0 || row >= i64::from(area.height) {
            continue;
        }
        for x in 0..src.area.width {
            let (Some(cell), Some(target)) = (
                src.cell((x, y)),
                dst.cell_mut((area.x + x, area.y + row as u16)),
            ) else {
                continue;
            };
            *target = cell.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sharetrace_app::UploadObserver;
    use sharetrace_core::SelectedImage;
    use std::sync::Arc;

    const WIDTH: u16 = 110;
    const HEIGHT: u16 = 40;

    /// Stage mounted with the panel height the view will draw
    fn stage() -> NarrativeStage {
        let mut stage = NarrativeStage::default();
        let areas = layout::narrative(Rect::new(0, 0, WIDTH, HEIGHT));
        stage.viewport_mut().mount(areas.viewport.height);
        stage
    }

    fn image() -> Arc<SelectedImage> {
        Arc::new(SelectedImage::from_data_url(
            "data:image/png;base64,iVBORw0KGgo=",
        ))
    }

    fn render(view: NarrativeView<'_>) -> TestTerminal {
        let mut term = TestTerminal::with_size(WIDTH, HEIGHT);
        term.render_widget(view, Rect::new(0, 0, WIDTH, HEIGHT));
        term
    }

    #[test]
    fn test_header_and_first_slide() {
        let stage = stage();
        let term = render(NarrativeView::new(&stage));
        assert!(term.buffer_contains(STORY_KICKER));
        assert!(term.buffer_contains("Awaiting upload · 0%"));
        assert!(term.buffer_contains("APPLICATION LAYER"));
        assert!(term.buffer_contains("STEP 1 · APP HEAP"));
        assert!(term.buffer_contains("Press Share to build payload"));
        assert!(term.buffer_contains("Approx size: 0 B"));
        assert!(term.buffer_contains("POST /upload HTTP/1.1"));
    }

    #[test]
    fn test_payload_panels_after_share() {
        let mut stage = stage();
        stage.on_image_selected(&image());
        stage.on_upload_start();
        let term = render(NarrativeView::new(&stage).caption("sunset"));
        assert!(term.buffer_contains("89 50 4e 47 0d 0a 1a 0a"));
        assert!(term.buffer_contains("Approx size: 9 B"));
        assert!(term.buffer_contains("\"caption\": \"sunset\""));
        assert!(term.buffer_contains("Status: Transmitting"));
        assert!(term.buffer_contains("Upload progress: 13%"));
    }

    #[test]
    fn test_scrolled_to_later_slide() {
        let mut stage = stage();
        let height = stage.viewport().panel_height().unwrap() as u32;
        stage.viewport_mut().set_offset(3 * height);
        let term = render(NarrativeView::new(&stage));
        assert!(term.buffer_contains("04 ROUTING"));
        assert!(term.buffer_contains("A destination path is selected"));
        assert!(term.buffer_contains("Coming soon."));
        assert!(!term.buffer_contains("APPLICATION LAYER"));
    }

    #[test]
    fn test_partial_scroll_shows_two_slides() {
        let mut stage = stage();
        let height = stage.viewport().panel_height().unwrap() as u32;
        // Bottom of slide 2 and top of slide 3
        stage.viewport_mut().set_offset(height + height / 2);
        let term = render(NarrativeView::new(&stage));
        assert!(term.buffer_contains("03 NETWORK + ETHERNET"));
        assert!(!term.buffer_contains("02 TRANSPORT LAYER"));
    }

    #[test]
    fn test_timeline_marks_active_slide() {
        let mut stage = stage();
        let height = stage.viewport().panel_height().unwrap() as u32;
        stage.viewport_mut().set_offset(7 * height);
        let term = render(NarrativeView::new(&stage));
        let dots: Vec<String> = (0..HEIGHT)
            .map(|y| term.row(y))
            .filter(|row| row.contains('●') || row.contains('○'))
            .collect();
        assert_eq!(dots.len(), 8);
        assert!(dots[7].contains('●'));
        assert!(dots[..7].iter().all(|row| !row.contains('●')));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let stage = NarrativeStage::default();
        let mut term = TestTerminal::with_size(10, 4);
        term.render_widget(NarrativeView::new(&stage), Rect::new(0, 0, 10, 4));
    }
}
