use super::*;

#[test]
fn toggle_label_tracks_state() {
    assert_eq!(toggle_label(SidebarState::Closed), "Open menu");
    assert_eq!(toggle_label(SidebarState::Open), "Close menu");
}
