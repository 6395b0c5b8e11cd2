//! Phone simulator widget
//!
//! Draws the mock photo app inside a phone frame: the empty feed, the new
//! post screen with the picked image and caption, and the upload screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use sharetrace_app::phone::{PhoneScreen, PhoneSimulator};
use sharetrace_core::{size_label, SelectedImage, PROGRESS_COMPLETE};

use crate::theme::{palette, styles};

/// Phone simulator drawn in the left column
pub struct PhoneView<'a> {
    phone: &'a PhoneSimulator,
    display_progress: f64,
    editing_caption: bool,
    loading: bool,
}

impl<'a> PhoneView<'a> {
    pub fn new(phone: &'a PhoneSimulator, display_progress: f64) -> Self {
        Self {
            phone,
            display_progress,
            editing_caption: false,
            loading: false,
        }
    }

    /// Show the caption cursor
    pub fn editing_caption(mut self, editing: bool) -> Self {
        self.editing_caption = editing;
        self
    }

    /// Show that a file read is in flight
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for PhoneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::phone_frame().title(Line::from(" ▬▬▬ ").centered());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width < 8 {
            return;
        }

        match self.phone.screen() {
            PhoneScreen::Feed => self.render_feed(inner, buf),
            PhoneScreen::Gallery => self.render_gallery(inner, buf),
            PhoneScreen::Uploading => self.render_uploading(inner, buf),
        }
    }
}

impl PhoneView<'_> {
    fn render_feed(&self, area: Rect, buf: &mut Buffer) {
        let [header, sep, stories, sep2, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        render_header(
            header,
            buf,
            Span::styled("Instagram", styles::text_bold()),
            None,
            Span::styled("♡ ✉", styles::text_primary()),
        );
        render_separator(sep, buf);
        Paragraph::new(Line::from(vec![
            Span::styled("◎", styles::accent()),
            Span::styled(" you ", styles::text_secondary()),
            Span::styled("○", styles::text_muted()),
            Span::styled(" user_1 ", styles::text_secondary()),
            Span::styled("○", styles::text_muted()),
            Span::styled(" user_2", styles::text_secondary()),
        ]))
        .render(stories, buf);
        render_separator(sep2, buf);

        let mut lines = vec![
            Line::from(Span::styled("[+]", styles::text_secondary())),
            Line::default(),
            Line::from(vec![
                Span::styled("Press ", styles::text_secondary()),
                Span::styled("n", styles::keybinding()),
                Span::styled(" to create a post", styles::text_secondary()),
            ]),
            Line::from(Span::styled(
                "Watch it travel through the network",
                styles::text_muted(),
            )),
        ];
        if self.loading {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Reading image…", styles::accent())));
        }
        render_centered(lines, body, buf);
    }

    fn render_gallery(&self, area: Rect, buf: &mut Buffer) {
        let [header, sep, image, sep2, caption] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(area);

        render_header(
            header,
            buf,
            Span::styled("✕", styles::text_primary()),
            Some(Span::styled("New Post", styles::text_bold())),
            Span::styled("Share", styles::share_button()),
        );
        render_separator(sep, buf);
        render_image_box(self.phone.image().map(|i| i.as_ref()), image, buf, false);
        render_separator(sep2, buf);

        let caption_text = self.phone.caption();
        let mut spans = vec![Span::styled("◯ ", styles::text_muted())];
        if caption_text.is_empty() && !self.editing_caption {
            spans.push(Span::styled("Write a caption...", styles::text_muted()));
        } else {
            spans.push(Span::styled(caption_text, styles::text_primary()));
        }
        if self.editing_caption {
            spans.push(Span::styled(
                "▏",
                styles::accent().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .render(caption, buf);
    }

    fn render_uploading(&self, area: Rect, buf: &mut Buffer) {
        let complete = self.display_progress >= PROGRESS_COMPLETE;
        let [header, sep, image, _, gauge, label, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(area);

        let title = if complete { "Shared!" } else { "Sharing..." };
        render_header(
            header,
            buf,
            Span::raw(""),
            Some(Span::styled(title, styles::text_bold())),
            Span::raw(""),
        );
        render_separator(sep, buf);
        render_image_box(self.phone.image().map(|i| i.as_ref()), image, buf, !complete);

        let [_, bar, _] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .areas(gauge);
        Gauge::default()
            .gauge_style(styles::progress_gauge())
            .ratio((self.display_progress / PROGRESS_COMPLETE).clamp(0.0, 1.0))
            .label("")
            .render(bar, buf);

        let text = if complete {
            "Upload complete".to_string()
        } else {
            format!("Uploading... {}%", self.display_progress.round() as u32)
        };
        Paragraph::new(Line::from(Span::styled(text, styles::text_secondary())).centered())
            .render(label, buf);

        if !complete {
            Paragraph::new(Line::from(Span::styled(
                "Watch the right panel →",
                styles::text_muted(),
            )))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(hint, buf);
        }
    }
}

/// One header row with left, optional centered and right content
fn render_header(
    area: Rect,
    buf: &mut Buffer,
    left: Span<'_>,
    center: Option<Span<'_>>,
    right: Span<'_>,
) {
    Paragraph::new(Line::from(left)).render(area, buf);
    if let Some(center) = center {
        Paragraph::new(Line::from(center).centered()).render(area, buf);
    }
    Paragraph::new(Line::from(right).right_aligned()).render(area, buf);
}

fn render_separator(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Span::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(palette::BORDER_DIM),
    ))
    .render(area, buf);
}

/// Stand-in for the photo: name, type and size in a framed box
fn render_image_box(image: Option<&SelectedImage>, area: Rect, buf: &mut Buffer, busy: bool) {
    let block = styles::glass_block(false);
    let inner = block.inner(area);
    block.render(area, buf);

    let Some(image) = image else {
        return;
    };
    let width = inner.width as usize;
    let name = truncate_to_width(image.file_name().unwrap_or("photo"), width);
    let meta = format!(
        "{} · {}",
        image.mime(),
        size_label(image.approx_size_bytes())
    );
    let icon = if busy { "⟳" } else { "▣" };

    let lines = vec![
        Line::from(Span::styled(icon, styles::accent())),
        Line::from(Span::styled(name, styles::text_primary())),
        Line::from(Span::styled(truncate_to_width(&meta, width), styles::text_muted())),
    ];
    render_centered(lines, inner, buf);
}

/// Draw lines centered both ways in `area`
fn render_centered(lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
    let width = area.width.max(1);
    let rows: u16 = lines
        .iter()
        .map(|line| (line.width() as u16).max(1).div_ceil(width))
        .sum();
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(rows.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(middle, buf);
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn image() -> SelectedImage {
        SelectedImage::from_bytes(&[0x89, 0x50, 0x4e, 0x47], "image/png", Some("cat.png".into()))
    }

    fn gallery_phone() -> PhoneSimulator {
        let mut phone = PhoneSimulator::new();
        phone.select_image(Some(image()), &mut ());
        phone
    }

    fn render(view: PhoneView<'_>) -> TestTerminal {
        let mut term = TestTerminal::with_size(32, 24);
        term.render_widget(view, Rect::new(0, 0, 32, 24));
        term
    }

    #[test]
    fn test_feed_screen() {
        let phone = PhoneSimulator::new();
        let term = render(PhoneView::new(&phone, 0.0));
        assert!(term.buffer_contains("Instagram"));
        assert!(term.buffer_contains("to create a post"));
        assert!(!term.buffer_contains("Reading image"));
    }

    #[test]
    fn test_feed_shows_loading() {
        let phone = PhoneSimulator::new();
        let term = render(PhoneView::new(&phone, 0.0).loading(true));
        assert!(term.buffer_contains("Reading image…"));
    }

    #[test]
    fn test_gallery_screen() {
        let phone = gallery_phone();
        let term = render(PhoneView::new(&phone, 0.0));
        assert!(term.buffer_contains("New Post"));
        assert!(term.buffer_contains("Share"));
        assert!(term.buffer_contains("cat.png"));
        assert!(term.buffer_contains("image/png"));
        assert!(term.buffer_contains("Write a caption..."));
    }

    #[test]
    fn test_gallery_caption_while_editing() {
        let mut phone = gallery_phone();
        for c in "beach day".chars() {
            phone.push_caption_char(c);
        }
        let term = render(PhoneView::new(&phone, 0.0).editing_caption(true));
        assert!(term.buffer_contains("beach day▏"));
        assert!(!term.buffer_contains("Write a caption"));
    }

    #[test]
    fn test_uploading_screen_shows_rounded_percent() {
        let mut phone = gallery_phone();
        phone.start_upload(&mut ());
        let term = render(PhoneView::new(&phone, 42.6));
        assert!(term.buffer_contains("Sharing..."));
        assert!(term.buffer_contains("Uploading... 43%"));
        assert!(term.buffer_contains("Watch the right panel"));
    }

    #[test]
    fn test_uploading_screen_shared_at_100() {
        let mut phone = gallery_phone();
        phone.start_upload(&mut ());
        let term = render(PhoneView::new(&phone, 100.0));
        assert!(term.buffer_contains("Shared!"));
        assert!(term.buffer_contains("Upload complete"));
        assert!(!term.buffer_contains("Uploading..."));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let phone = gallery_phone();
        let mut term = TestTerminal::with_size(6, 3);
        term.render_widget(PhoneView::new(&phone, 0.0), Rect::new(0, 0, 6, 3));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("cat.png", 10), "cat.png");
        assert_eq!(truncate_to_width("holiday-photo.png", 8), "holiday…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
