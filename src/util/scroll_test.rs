use super::*;
use std::cell::Cell;

struct FakeContainer {
    height: i32,
    top: Cell<i32>,
}

impl ScrollTarget for &FakeContainer {
    fn scroll_height(&self) -> i32 {
        self.height
    }

    fn set_scroll_top(&self, top: i32) {
        self.top.set(top);
    }
}

#[test]
fn tracker_claims_new_requests_once() {
    let mut tracker = ScrollTracker::default();
    assert!(tracker.claim(1));
    assert!(!tracker.claim(1));
}

#[test]
fn tracker_ignores_initial_zero_sequence() {
    let mut tracker = ScrollTracker::default();
    assert!(!tracker.claim(0));
}

#[test]
fn tracker_collapses_stale_requests() {
    let mut tracker = ScrollTracker::default();
    // Two requests queued before a frame: the newest wins, the older is dropped.
    assert!(tracker.claim(3));
    assert!(!tracker.claim(2));
    assert!(tracker.claim(4));
}

#[test]
fn scroll_error_display() {
    assert_eq!(ScrollError::ContainerMissing.to_string(), "message container is not mounted");
}

// =============================================================
// scroll_to_bottom
// =============================================================

#[test]
fn scroll_to_bottom_without_container_reports_missing() {
    let result = scroll_to_bottom::<&FakeContainer>(None);
    assert_eq!(result, Err(ScrollError::ContainerMissing));
}

#[test]
fn scroll_to_bottom_sets_offset_to_scroll_height() {
    let container = FakeContainer { height: 1_840, top: Cell::new(0) };
    scroll_to_bottom(Some(&container)).unwrap();
    assert_eq!(container.top.get(), 1_840);
}

#[test]
fn missing_container_leaves_conversation_usable() {
    use crate::net::types::ChatResponse;
    use crate::state::chat::ConversationState;

    let mut state = ConversationState::new();
    state.draft = "Who won Christmas Day 2023?".to_owned();
    state.submit().unwrap();
    assert!(!pin_to_bottom::<&FakeContainer>(None));

    state.settle(Ok(ChatResponse::default()));
    assert!(!state.is_pending());
    assert_eq!(state.turns().len(), 3);
}

#[test]
fn pin_to_bottom_applies_scroll_when_mounted() {
    let container = FakeContainer { height: 320, top: Cell::new(12) };
    assert!(pin_to_bottom(Some(&container)));
    assert_eq!(container.top.get(), 320);
}
