//! Date conversion and result-stream helpers shared by the loader and writer.

use crate::error::{NeoError, Result};
use chrono::NaiveDateTime;

/// Format of calendar dates in close-approach source data, e.g. `1900-Jan-01 00:11`.
pub const SOURCE_DATETIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Canonical output format, e.g. `1900-01-01 00:11`.
pub const OUTPUT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a close-approach calendar date (`YYYY-Mon-DD HH:MM`) into a naive date-time.
///
/// # Examples
///
/// ```
/// use neodb::helpers::{cd_to_datetime, datetime_to_str};
///
/// let time = cd_to_datetime("2020-Jan-01 12:30")?;
/// assert_eq!(datetime_to_str(&time), "2020-01-01 12:30");
/// # Ok::<(), neodb::NeoError>(())
/// ```
pub fn cd_to_datetime(calendar_date: &str) -> Result<NaiveDateTime> {
    let trimmed = calendar_date.trim();
    NaiveDateTime::parse_from_str(trimmed, SOURCE_DATETIME_FORMAT).map_err(|source| {
        NeoError::InvalidTimestamp {
            value: trimmed.to_string(),
            source,
        }
    })
}

/// Render a date-time as `YYYY-MM-DD HH:MM` (no seconds, no timezone).
pub fn datetime_to_str(time: &NaiveDateTime) -> String {
    time.format(OUTPUT_DATETIME_FORMAT).to_string()
}

/// Render a number for CSV output, always in positional notation.
///
/// Integral values keep a trailing `.0`, and NaN (an unknown value) becomes `nan`.
///
/// ```
/// use neodb::helpers::format_float;
///
/// assert_eq!(format_float(1.0), "1.0");
/// assert_eq!(format_float(1e-7), "0.0000001");
/// assert_eq!(format_float(f64::NAN), "nan");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Lazily cap a result stream at `n` items. `None` and `Some(0)` mean unlimited.
pub fn limit<I>(iter: I, n: Option<usize>) -> std::iter::Take<I::IntoIter>
where
    I: IntoIterator,
{
    let cap = match n {
        Some(0) | None => usize::MAX,
        Some(n) => n,
    };
    iter.into_iter().take(cap)
}
