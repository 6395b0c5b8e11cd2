//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use sharetrace_app::state::{AppState, UiMode};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Besides drawing, this measures the narrative viewport and hands the
/// panel height to the scroll state; scrolling is inert until then.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::PHONE_SCREEN_BG)),
        area,
    );

    let areas = layout::create(area);

    let narrative_areas = layout::narrative(areas.narrative);
    if narrative_areas.viewport.height > 0 {
        state
            .narrative
            .viewport_mut()
            .mount(narrative_areas.viewport.height);
        // Mounting can move the active slide (resize); let the phone follow
        state.sync_upload();
    }

    let phone = widgets::PhoneView::new(&state.phone, state.phone_display_progress())
        .editing_caption(state.ui_mode == UiMode::CaptionInput)
        .loading(state.loading_image);
    frame.render_widget(phone, areas.phone);

    let narrative = widgets::NarrativeView::new(&state.narrative).caption(state.phone.caption());
    frame.render_widget(narrative, areas.narrative);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if state.ui_mode == UiMode::FilePrompt {
        frame.render_widget(widgets::FilePrompt::new(&state.file_prompt), area);
    }
}
