//! Scroll message handlers

use crate::state::{AppState, Focus};

use super::UpdateResult;

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    match state.focus {
        Focus::Logs => state.log_view_state.scroll_up(1),
        Focus::Directives => state.directives.select_previous(),
    }
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    match state.focus {
        Focus::Logs => state.log_view_state.scroll_down(1),
        Focus::Directives => state.directives.select_next(),
    }
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.log_view_state.scroll_to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.log_view_state.scroll_to_bottom();
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.log_view_state.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.log_view_state.page_down();
    UpdateResult::none()
}
