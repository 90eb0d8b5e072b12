//! Networking for the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` defines the backend seam, `api` implements it over HTTP, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod gateway;
pub mod types;
