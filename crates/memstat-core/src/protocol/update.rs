//! Update path grammar.
//!
//! Canonical form: `/update/<type>/<name>/<value>`. Leading and trailing
//! slashes are trimmed before counting segments, so `/update/gauge/t/1/`
//! and `update/gauge/t/1` decode the same way as the canonical form.
//!
//! Segments are percent-decoded after splitting, so `%2F` stays inside its
//! segment and `cpu%20load` names the metric `cpu load`. Bytes that do not
//! decode to UTF-8 become U+FFFD.
//!
//! Checks run in a fixed order and the first failure wins:
//! path shape, name presence, metric type, value.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use percent_encoding::percent_decode_str;

use crate::error::{MemstatError, Result};

/// Fixed first path segment of an update request.
pub const UPDATE_PREFIX: &str = "update";

/// Metric kind (field name is `type` in the path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Last write wins, `f64`.
    Gauge,
    /// Running sum of deltas, `i64`.
    Counter,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = MemstatError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gauge" => Ok(MetricKind::Gauge),
            "counter" => Ok(MetricKind::Counter),
            other => Err(MemstatError::UnknownKind(other.to_string())),
        }
    }
}

/// One decoded update, ready to apply to a store.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricUpdate {
    Gauge { name: String, value: f64 },
    Counter { name: String, delta: i64 },
}

impl MetricUpdate {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricUpdate::Gauge { .. } => MetricKind::Gauge,
            MetricUpdate::Counter { .. } => MetricKind::Counter,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MetricUpdate::Gauge { name, .. } | MetricUpdate::Counter { name, .. } => name,
        }
    }
}

/// Decode a request path into a typed update.
///
/// Does not look at the HTTP method; callers check it first.
pub fn parse_update_path(path: &str) -> Result<MetricUpdate> {
    let segments: Vec<Cow<'_, str>> = path
        .trim_matches('/')
        .split('/')
        .map(|seg| percent_decode_str(seg).decode_utf8_lossy())
        .collect();

    let [prefix, kind, name, value] = segments.as_slice() else {
        return Err(MemstatError::RouteShape(format!(
            "expected /{UPDATE_PREFIX}/<type>/<name>/<value>, got {path}"
        )));
    };
    if prefix != UPDATE_PREFIX {
        return Err(MemstatError::RouteShape(format!("unknown prefix: {prefix}")));
    }
    if name.is_empty() {
        return Err(MemstatError::RouteShape("metric name is required".into()));
    }

    let kind: MetricKind = kind.parse()?;
    let invalid = || MemstatError::ValueParse {
        kind,
        value: value.to_string(),
    };

    match kind {
        MetricKind::Gauge => {
            let parsed = value.parse::<f64>().map_err(|_| invalid())?;
            // f64::from_str saturates out-of-range literals like 1e400 to inf
            if parsed.is_infinite() && !spells_infinity(value) {
                return Err(invalid());
            }
            Ok(MetricUpdate::Gauge { name: name.to_string(), value: parsed })
        }
        MetricKind::Counter => {
            // i64::from_str is base 10 only and rejects "3.5"
            let delta = value.parse::<i64>().map_err(|_| invalid())?;
            Ok(MetricUpdate::Counter { name: name.to_string(), delta })
        }
    }
}

fn spells_infinity(literal: &str) -> bool {
    let unsigned = literal.strip_prefix(['+', '-']).unwrap_or(literal);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
