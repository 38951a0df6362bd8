//! Display formatting for history timestamps and usage statistics.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Derived average generations per day, assuming a seven-day window.
///
/// Computed client-side; the backend only transmits the totals.
pub fn avg_per_day(total_prompts: i64) -> i64 {
    if total_prompts > 0 {
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        {
            ((total_prompts as f64) / 7.0).round() as i64
        }
    } else {
        0
    }
}

/// Render an ISO-8601 local datetime (`2026-08-29T10:15:30`) as
/// `2026-08-29 10:15`. Strings without a `T` separator pass through
/// unchanged rather than failing the whole history render.
pub fn format_timestamp(iso: &str) -> String {
    match iso.split_once('T') {
        Some((date, time)) => {
            let hhmm = time.get(..5).unwrap_or(time);
            format!("{date} {hhmm}")
        }
        None => iso.to_owned(),
    }
}
