//! memstat server library entry.
//!
//! Wires config, shared state, the HTTP update endpoint, and ops routes into
//! an axum router. Consumed by the binary (`main.rs`) and by integration
//! tests, which drive the router directly.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod transport;
