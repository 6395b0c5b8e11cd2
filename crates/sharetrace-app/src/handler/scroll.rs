//! Narrative scroll handlers

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_scroll_by(state: &mut AppState, delta: i32) -> UpdateResult {
    state.narrative.viewport_mut().scroll_by(delta);
    UpdateResult::none()
}

pub fn handle_next_slide(state: &mut AppState) -> UpdateResult {
    state.narrative.viewport_mut().next_slide();
    UpdateResult::none()
}

pub fn handle_previous_slide(state: &mut AppState) -> UpdateResult {
    state.narrative.viewport_mut().previous_slide();
    UpdateResult::none()
}

pub fn handle_jump_to_slide(state: &mut AppState, index: usize) -> UpdateResult {
    state.narrative.viewport_mut().jump_to_slide(index);
    UpdateResult::none()
}
