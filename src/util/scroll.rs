//! Keep the message list pinned to its newest entry.
//!
//! A scroll is requested by bumping `ConversationState::scroll_seq`. The view
//! reacts after re-rendering and defers to the next animation frame, when the
//! new content has been laid out and `scroll_height` is final. Requests that
//! pile up before a frame collapse into one scroll via [`ScrollTracker`].

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScrollError {
    #[error("message container is not mounted")]
    ContainerMissing,
}

/// Remembers the newest scroll request that was applied.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    applied: u64,
}

impl ScrollTracker {
    /// Claim request `seq` if it is newer than anything applied so far.
    ///
    /// Returns `false` for stale or already-applied requests.
    pub fn claim(&mut self, seq: u64) -> bool {
        if seq <= self.applied {
            return false;
        }
        self.applied = seq;
        true
    }
}

/// Element whose vertical scroll offset can be driven.
pub trait ScrollTarget {
    fn scroll_height(&self) -> i32;
    fn set_scroll_top(&self, top: i32);
}

#[cfg(feature = "hydrate")]
impl ScrollTarget for web_sys::HtmlDivElement {
    fn scroll_height(&self) -> i32 {
        web_sys::Element::scroll_height(self)
    }

    fn set_scroll_top(&self, top: i32) {
        web_sys::Element::set_scroll_top(self, top);
    }
}

/// Scroll `container` to its bottom.
///
/// # Errors
///
/// Returns [`ScrollError::ContainerMissing`] if the element is not mounted.
pub fn scroll_to_bottom<T: ScrollTarget>(container: Option<T>) -> Result<(), ScrollError> {
    let el = container.ok_or(ScrollError::ContainerMissing)?;
    el.set_scroll_top(el.scroll_height());
    Ok(())
}

/// Scroll `container` to its bottom, logging instead of failing.
///
/// Returns whether the scroll was applied.
pub fn pin_to_bottom<T: ScrollTarget>(container: Option<T>) -> bool {
    match scroll_to_bottom(container) {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("scroll to bottom failed: {e}");
            false
        }
    }
}
