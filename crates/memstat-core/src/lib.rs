//! memstat core: metric storage, the update path grammar, and error types.
//!
//! This crate holds everything that does not depend on a transport: the
//! in-memory gauge/counter store and the decoder that turns an update path
//! into a typed mutation. It carries no runtime or HTTP dependencies so the
//! server and tests can share it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! Malformed input surfaces as `MemstatError`, never as a crash or a
//! default-zero write.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod storage;

/// Shared result type.
pub use error::{MemstatError, Result};
pub use storage::MemStorage;
