//! Transport layer (HTTP).
//!
//! Exposes the update handler that validates a request, decodes the path
//! once, and applies the result to the store.

pub mod update;
