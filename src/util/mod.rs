//! Browser helpers.

pub mod scroll;
