//! Content of a single story panel

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use sharetrace_app::NarrativeStage;
use sharetrace_core::slides::{
    APPLICATION_BODY, APPLICATION_HEADLINE, STEP_HEAP_BODY, STEP_HEAP_TITLE, STEP_HTTP_BODY,
    STEP_HTTP_TITLE, STEP_TLS_BODY, STEP_TLS_TITLE, UPCOMING_BODY, UPCOMING_PLACEHOLDER,
};
use sharetrace_core::{json_payload_preview, Slide, TLS_RECORD_PREVIEW};

use crate::theme::{palette, styles};

/// One slide, laid out for a panel exactly one viewport tall
pub struct SlideView<'a> {
    index: usize,
    slide: &'a Slide,
    stage: &'a NarrativeStage,
    caption: &'a str,
}

impl<'a> SlideView<'a> {
    pub fn new(index: usize, slide: &'a Slide, stage: &'a NarrativeStage, caption: &'a str) -> Self {
        Self {
            index,
            slide,
            stage,
            caption,
        }
    }
}

impl Widget for SlideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let headline = if self.index == 0 {
            APPLICATION_HEADLINE
        } else {
            self.slide.subtitle
        };
        let body = if self.index == 0 {
            APPLICATION_BODY
        } else {
            UPCOMING_BODY
        };

        let [kicker, title, text, _, content] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled(format!("{:02} ", self.index + 1), styles::accent()),
            Span::styled(self.slide.title.to_uppercase(), styles::kicker()),
        ]))
        .render(kicker, buf);
        Paragraph::new(Span::styled(headline, styles::text_bold()))
            .wrap(Wrap { trim: true })
            .render(title, buf);
        Paragraph::new(Span::styled(body, styles::text_secondary()))
            .wrap(Wrap { trim: true })
            .render(text, buf);

        if self.index == 0 {
            self.render_application(content, buf);
        } else {
            render_upcoming(content, buf);
        }
    }
}

impl SlideView<'_> {
    /// The three in-app steps: heap, HTTP request, TLS records
    fn render_application(&self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(1)
                .areas(area);
        let [http, tls] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(7)]).areas(right);

        let previews = self.stage.previews();

        let mut heap = vec![
            Line::styled(STEP_HEAP_BODY, styles::text_secondary()),
            Line::default(),
        ];
        heap.extend(code_lines(
            &json_payload_preview(self.caption, previews.size_bytes),
            palette::CODE_JS,
        ));
        heap.push(Line::default());
        heap.push(Line::styled("Image bytes preview", styles::text_muted()));
        heap.push(Line::styled(
            self.stage.byte_panel_text().to_string(),
            styles::code(palette::HEX_PLAIN),
        ));
        heap.push(Line::styled(
            format!("Approx size: {}", previews.size_label),
            styles::text_muted(),
        ));
        if self.stage.image().is_some() {
            heap.push(Line::default());
            heap.push(Line::styled(
                format!("Status: {}", self.stage.status_label()),
                styles::text_secondary(),
            ));
            heap.push(Line::styled(
                format!(
                    "Upload progress: {}%",
                    self.stage.synced_progress().round() as u32
                ),
                styles::text_secondary(),
            ));
        }
        card(STEP_HEAP_TITLE, heap, left, buf);

        let mut request = vec![
            Line::styled(STEP_HTTP_BODY, styles::text_secondary()),
            Line::default(),
        ];
        request.extend(code_lines(&previews.http_request, palette::CODE_HTTP));
        card(STEP_HTTP_TITLE, request, http, buf);

        let records = vec![
            Line::styled(STEP_TLS_BODY, styles::text_secondary()),
            Line::default(),
            Line::styled("Encrypted payload (preview)", styles::text_muted()),
            Line::styled(TLS_RECORD_PREVIEW, styles::code(palette::HEX_ENCRYPTED)),
        ];
        card(STEP_TLS_TITLE, records, tls, buf);
    }
}

fn render_upcoming(area: Rect, buf: &mut Buffer) {
    let [placeholder, _] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    Paragraph::new(Span::styled(UPCOMING_PLACEHOLDER, styles::text_muted()))
        .block(styles::glass_block(false))
        .render(placeholder, buf);
}

fn code_lines(text: &str, color: ratatui::style::Color) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| Line::styled(line.to_string(), styles::code(color)))
        .collect()
}

fn card(title: &str, lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
    Paragraph::new(lines)
        .block(styles::card_block(title))
        .wrap(Wrap { trim: false })
        .render(area, buf);
}
