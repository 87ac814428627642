//! Mobile sidebar open/closed signal.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use responsive::sidebar::SidebarState;

/// Publish a closed sidebar signal for the subtree.
pub fn provide_sidebar() -> RwSignal<SidebarState> {
    let state = RwSignal::new(SidebarState::default());
    provide_context(state);
    state
}

/// Close the sidebar if open. Used by navigation links inside the panel.
pub fn close_sidebar(state: RwSignal<SidebarState>) {
    if state.with_untracked(|s| s.is_open()) {
        state.update(|s| {
            s.close();
        });
    }
}

/// Aria label for the toggle button.
#[must_use]
pub fn toggle_label(state: SidebarState) -> &'static str {
    if state.is_open() { "Close menu" } else { "Open menu" }
}
