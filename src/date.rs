//! Date rendering for the `%d` and `%r` directives.
//!
//! The named formats (`ISO8601`, `ABSOLUTE`, `DATE`) are aliases most
//! patterns reach for; anything else inside `%d{...}` is taken as a chrono
//! format template verbatim.

use chrono::{DateTime, Local};

/// Default for `%d` with no specifier: `2024-05-17T14:30:00.000`.
pub const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// `%d{ABSOLUTE}`: time of day with milliseconds, `14:30:00.000`.
pub const ABSOLUTETIME_FORMAT: &str = "%H:%M:%S%.3f";

/// `%d{DATE}`: day-first date plus time, `17 05 2024 14:30:00.000`.
pub const DATETIME_FORMAT: &str = "%d %m %Y %H:%M:%S%.3f";

/// `%r` renders a bare time of day, no sub-second noise.
const LOCALE_TIME_FORMAT: &str = "%H:%M:%S";

/// Maps the alias names to their templates; unknown specifiers pass through
/// verbatim as custom chrono templates.
#[must_use]
pub fn resolve(specifier: &str) -> &str {
    match specifier {
        "ISO8601" => ISO8601_FORMAT,
        "ABSOLUTE" => ABSOLUTETIME_FORMAT,
        "DATE" => DATETIME_FORMAT,
        other => other,
    }
}

/// Renders a timestamp through a chrono format template.
#[must_use]
pub fn as_string(template: &str, when: &DateTime<Local>) -> String {
    when.format(template).to_string()
}

/// Time-of-day rendering for `%r`.
#[must_use]
pub fn locale_time(when: &DateTime<Local>) -> String {
    when.format(LOCALE_TIME_FORMAT).to_string()
}
