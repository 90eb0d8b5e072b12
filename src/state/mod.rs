//! Client-side conversation state.
//!
//! DESIGN
//! ======
//! The chat turn lifecycle lives here as plain data with no signal or DOM
//! access, so the component layer only wires events to these transitions.

pub mod chat;
