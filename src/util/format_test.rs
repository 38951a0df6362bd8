use super::*;

// =============================================================
// avg_per_day
// =============================================================

#[test]
fn avg_per_day_rounds_total_over_seven() {
    assert_eq!(avg_per_day(10), 1);
    assert_eq!(avg_per_day(7), 1);
    assert_eq!(avg_per_day(25), 4);
}

#[test]
fn avg_per_day_zero_total_is_zero() {
    assert_eq!(avg_per_day(0), 0);
}

#[test]
fn avg_per_day_small_totals_round_to_nearest() {
    // 3/7 ≈ 0.43 rounds down, 4/7 ≈ 0.57 rounds up.
    assert_eq!(avg_per_day(3), 0);
    assert_eq!(avg_per_day(4), 1);
}

// =============================================================
// format_timestamp
// =============================================================

#[test]
fn format_timestamp_drops_seconds() {
    assert_eq!(format_timestamp("2026-08-29T10:15:30"), "2026-08-29 10:15");
}

#[test]
fn format_timestamp_handles_short_time_part() {
    assert_eq!(format_timestamp("2026-08-29T10:15"), "2026-08-29 10:15");
}

#[test]
fn format_timestamp_passes_through_unrecognized_input() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp(""), "");
}
