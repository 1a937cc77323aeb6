//! Update protocol primitives.
//!
//! - `MetricKind`: the two metric kinds accepted on the wire.
//! - `MetricUpdate`: one decoded, typed mutation.
//! - `parse_update_path`: the `/update/<type>/<name>/<value>` grammar.
//!
//! The parser is panic-free and never indexes past the segments it has
//! counted; every rejection is a `MemstatError`.

pub mod update;

pub use update::{parse_update_path, MetricKind, MetricUpdate, UPDATE_PREFIX};
