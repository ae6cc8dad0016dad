//! One log call produces one event — a fixed set of fields plus a variadic
//! argument list whose elements can be anything the caller logged.

use chrono::{DateTime, Local};
use std::fmt;

/// Error-like argument — carries the stack trace text separately so the
/// message formatter can put it on its own line after the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    /// Human-readable description, rendered inline with the other arguments.
    pub message: String,
    /// Multi-line trace text; appended on the following line when present.
    pub stack: Option<String>,
}

impl ErrorValue {
    /// Most call sites only have a message — the stack is attached separately.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    /// Frameworks that capture backtraces attach them here.
    #[must_use]
    pub fn stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

/// Closed set of argument shapes — template substitution (`%s`/`%d`/`%j`)
/// and the structural fallback both match on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Plain text; a leading `Str` in the argument list acts as the template.
    Str(String),
    /// Numbers are kept as `f64` so `%d` coercion has a single target type.
    Num(f64),
    /// Structured literal — arrays, objects, bools, null.
    Json(serde_json::Value),
    /// Error-like value with an optional stack trace.
    Error(ErrorValue),
}

impl Value {
    /// `%d` coerces its argument to a number; anything non-numeric becomes
    /// NaN rather than an error.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Num(n) => *n,
            Self::Str(s) => s.trim().parse().unwrap_or(f64::NAN),
            Self::Json(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
            Self::Json(serde_json::Value::Bool(b)) => f64::from(u8::from(*b)),
            Self::Json(_) | Self::Error(_) => f64::NAN,
        }
    }

    /// `%j` serializes its argument; non-finite numbers map to `null`, the
    /// same hole JSON itself has.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Str(s) => serde_json::Value::String(s.clone()),
            Self::Num(n) => serde_json::Number::from_f64(*n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::Json(v) => v.clone(),
            Self::Error(e) => {
                let mut map = serde_json::Map::new();
                map.insert(
                    "message".to_string(),
                    serde_json::Value::String(e.message.clone()),
                );
                if let Some(stack) = &e.stack {
                    map.insert("stack".to_string(), serde_json::Value::String(stack.clone()));
                }
                serde_json::Value::Object(map)
            }
        }
    }

    /// Structural rendering for arguments not consumed by the template.
    /// Deterministic for a given shape: strings are single-quoted, objects
    /// serialize with sorted keys (serde_json's default map ordering).
    #[must_use]
    pub fn inspect(&self) -> String {
        match self {
            Self::Str(s) => format!("'{s}'"),
            Self::Num(n) => n.to_string(),
            Self::Json(v) => v.to_string(),
            Self::Error(e) => format!("Error: {}", e.message),
        }
    }

    /// The message formatter appends this on its own line after the value.
    #[must_use]
    pub fn stack(&self) -> Option<&str> {
        match self {
            Self::Error(e) => e.stack.as_deref(),
            _ => None,
        }
    }
}

/// Display string used by `%s` substitution — unquoted, unlike [`Value::inspect`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Num(n) => write!(f, "{n}"),
            Self::Json(v) => write!(f, "{v}"),
            Self::Error(e) => f.write_str(&e.message),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Num(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Num(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Json(serde_json::Value::Bool(b))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

impl From<ErrorValue> for Value {
    fn from(e: ErrorValue) -> Self {
        Self::Error(e)
    }
}

/// Carries all data a layout needs to render one log line — populated by the
/// consuming framework, read-only here.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// When the log call happened; `%d` and `%r` read it.
    pub start_time: DateTime<Local>,
    /// Dot-delimited hierarchy, e.g. `net.server.http` — `%c` reads it.
    pub category_name: String,
    /// Free-form level name; `%p` renders it uppercased.
    pub level: String,
    /// Variadic arguments of the log call; `%m` renders them.
    pub data: Vec<Value>,
}

impl LogEvent {
    /// Timestamped at creation — tests pin a fixed time via [`LogEvent::at`].
    #[must_use]
    pub fn new(category: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            start_time: Local::now(),
            category_name: category.into(),
            level: level.into(),
            data: Vec::new(),
        }
    }

    /// Reproducible output needs a pinned timestamp instead of `now()`.
    #[must_use]
    pub fn at(mut self, when: DateTime<Local>) -> Self {
        self.start_time = when;
        self
    }

    /// Appends one argument; chained calls read like the original log call.
    #[must_use]
    pub fn data(mut self, value: impl Into<Value>) -> Self {
        self.data.push(value.into());
        self
    }
}
