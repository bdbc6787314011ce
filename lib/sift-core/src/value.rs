//! Typed query-parameter values.
//!
//! Every option is held as an explicit [`ParamValue`]; an option that was never
//! set is simply absent from the request. `false` and `0` are ordinary set
//! values and are always encoded.

use std::fmt;
use std::time::Duration;

use crate::ParamKind;

/// Slice count for parallelized scroll-based operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slices {
    /// A fixed number of slices.
    Count(u32),
    /// Let the service pick a slice count.
    Auto,
}

impl fmt::Display for Slices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

impl From<u32> for Slices {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

/// A value for a query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Rendered as `true` / `false`.
    Bool(bool),
    /// Rendered as a decimal integer.
    Int(i64),
    /// Rendered with a time-unit suffix (`30s`, `1500ms`).
    Duration(Duration),
    /// Rendered verbatim.
    Str(String),
    /// Rendered comma-joined; an empty list is not rendered.
    List(Vec<String>),
    /// Rendered as a count or `auto`.
    Slices(Slices),
}

impl ParamValue {
    /// The declared kind this value satisfies.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        match self {
            Self::Bool(_) => ParamKind::Bool,
            Self::Int(_) => ParamKind::Int,
            Self::Duration(_) => ParamKind::Duration,
            Self::Str(_) => ParamKind::Str,
            Self::List(_) => ParamKind::List,
            Self::Slices(_) => ParamKind::Slices,
        }
    }

    /// Render the value as it appears in a query string.
    ///
    /// Returns `None` for an empty list, which encodes the same as an unset option.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Bool(value) => Some(value.to_string()),
            Self::Int(value) => Some(value.to_string()),
            Self::Duration(value) => Some(format_duration(*value)),
            Self::Str(value) => Some(value.clone()),
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
            Self::Slices(value) => Some(value.to_string()),
        }
    }
}

/// A value for a path part: one name, or several joined with `,`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathValue {
    /// A single name or id.
    One(String),
    /// Several names, such as a list of indices.
    Many(Vec<String>),
}

impl PathValue {
    /// Returns `true` if the part renders to nothing.
    ///
    /// Several empty names still render their `,` separators, so only an
    /// empty list or a single empty name counts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(value) => value.is_empty(),
            Self::Many(values) => values.len() <= 1 && values.iter().all(String::is_empty),
        }
    }
}

impl From<String> for PathValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<&str> for PathValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<&String> for PathValue {
    fn from(value: &String) -> Self {
        Self::One(value.clone())
    }
}

impl From<Vec<String>> for PathValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for PathValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for PathValue {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().map(|value| (*value).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathValue {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: u128 = 24 * NANOS_PER_HOUR;

// Largest unit first.
const TIME_UNITS: [(u128, &str); 6] = [
    (NANOS_PER_DAY, "d"),
    (NANOS_PER_HOUR, "h"),
    (NANOS_PER_MINUTE, "m"),
    (NANOS_PER_SECOND, "s"),
    (NANOS_PER_MILLI, "ms"),
    (NANOS_PER_MICRO, "micros"),
];

/// Format a duration in the service's time-unit syntax.
///
/// Picks the largest unit that represents the duration exactly, so no
/// precision is lost: `30s`, `90s` (not `1.5m`), `1500ms`, `250micros`.
///
/// ```
/// use std::time::Duration;
/// use sift_core::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(30)), "30s");
/// assert_eq!(format_duration(Duration::from_secs(120)), "2m");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1500ms");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    TIME_UNITS
        .iter()
        .find(|(unit, _)| nanos % unit == 0)
        .map_or_else(
            || format!("{nanos}nanos"),
            |(unit, suffix)| format!("{}{suffix}", nanos / unit),
        )
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<Duration> for ParamValue {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(values: [&str; N]) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Slices> for ParamValue {
    fn from(value: Slices) -> Self {
        Self::Slices(value)
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn render_scalars() {
        check!(ParamValue::Bool(true).render().as_deref() == Some("true"));
        check!(ParamValue::Bool(false).render().as_deref() == Some("false"));
        check!(ParamValue::Int(0).render().as_deref() == Some("0"));
        check!(ParamValue::Int(-1).render().as_deref() == Some("-1"));
        check!(ParamValue::from("wait_for").render().as_deref() == Some("wait_for"));
    }

    #[test]
    fn render_lists() {
        check!(ParamValue::from(["a", "b"]).render().as_deref() == Some("a,b"));
        check!(ParamValue::from(vec!["only"]).render().as_deref() == Some("only"));
        check!(ParamValue::List(Vec::new()).render().is_none());
    }

    #[test]
    fn render_slices() {
        check!(ParamValue::from(Slices::Auto).render().as_deref() == Some("auto"));
        check!(ParamValue::from(Slices::from(5)).render().as_deref() == Some("5"));
    }

    #[test]
    fn duration_units() {
        check!(format_duration(Duration::ZERO) == "0s");
        check!(format_duration(Duration::from_secs(30)) == "30s");
        check!(format_duration(Duration::from_secs(90)) == "90s");
        check!(format_duration(Duration::from_secs(300)) == "5m");
        check!(format_duration(Duration::from_secs(7200)) == "2h");
        check!(format_duration(Duration::from_secs(172_800)) == "2d");
        check!(format_duration(Duration::from_millis(1500)) == "1500ms");
        check!(format_duration(Duration::from_micros(250)) == "250micros");
        check!(format_duration(Duration::from_nanos(42)) == "42nanos");
    }

    #[test]
    fn path_value_emptiness() {
        check!(PathValue::from("").is_empty());
        check!(PathValue::from(Vec::<String>::new()).is_empty());
        check!(PathValue::from([""]).is_empty());
        check!(!PathValue::from("logs").is_empty());
        check!(!PathValue::from(["a", "b"]).is_empty());
        check!(!PathValue::from(["", ""]).is_empty());
    }

    #[test]
    fn value_kinds() {
        check!(ParamValue::from(true).kind() == ParamKind::Bool);
        check!(ParamValue::from(3_u32).kind() == ParamKind::Int);
        check!(ParamValue::from(Duration::from_secs(1)).kind() == ParamKind::Duration);
        check!(ParamValue::from("x").kind() == ParamKind::Str);
        check!(ParamValue::from(vec!["x".to_string()]).kind() == ParamKind::List);
        check!(ParamValue::from(Slices::Auto).kind() == ParamKind::Slices);
    }
}
