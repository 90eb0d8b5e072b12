//! UI components.

pub mod chat_view;
pub mod suggestion_bar;
pub mod turn_bubble;
