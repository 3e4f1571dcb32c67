//! The discretized daily timeline.
//!
//! The day grid is a fixed run of 15-minute rows starting at a fixed
//! wall-clock offset. Row indices are the only unit of time arithmetic
//! in the engine; wall-clock minutes and `"H:MM"` strings exist solely
//! at the input/output boundary.
//!
//! # Row Model
//! A row index is a `u32` in `[0, TOTAL_ROWS)`. Task ranges are half-open
//! `[start, end)` row intervals. `to_row` clamps into `[0, TOTAL_ROWS]`
//! so that out-of-day inputs land on the grid edges.

/// Minutes per row.
pub const SLOT_MINUTES: u32 = 15;

/// Number of rows in the day grid.
pub const TOTAL_ROWS: u32 = 26;

/// Wall-clock offset of row 0, in minutes since midnight (09:30).
pub const DAY_START_MINUTES: u32 = 9 * 60 + 30;

/// Maps minutes-since-midnight to a row index, clamped into `[0, TOTAL_ROWS]`.
///
/// Times before the day start map to 0; times at or past the day end map
/// to `TOTAL_ROWS`.
#[inline]
pub fn to_row(minutes: u32) -> u32 {
    (minutes.saturating_sub(DAY_START_MINUTES) / SLOT_MINUTES).min(TOTAL_ROWS)
}

/// Maps a row index back to minutes-since-midnight.
///
/// Inverse of [`to_row`] for rows in `[0, TOTAL_ROWS]`; not clamped, the
/// caller guarantees a valid row.
#[inline]
pub fn row_to_minutes(row: u32) -> u32 {
    DAY_START_MINUTES + row * SLOT_MINUTES
}

/// Renders a row boundary as `"H:MM"` wall-clock time.
pub fn row_to_time(row: u32) -> String {
    let minutes = row_to_minutes(row);
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Renders a `[start, end)` row range as `"H:MM-H:MM"`.
pub fn row_range_label(start: u32, end: u32) -> String {
    format!("{}-{}", row_to_time(start), row_to_time(end))
}

/// Parses `"H:MM"` or `"HH:MM"` into minutes-since-midnight.
///
/// Returns `None` for anything that is not a valid 24-hour time.
pub fn parse_time(s: &str) -> Option<u32> {
    let (hours, minutes) = s.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_row_floors_within_slot() {
        assert_eq!(to_row(DAY_START_MINUTES), 0);
        assert_eq!(to_row(DAY_START_MINUTES + 14), 0);
        assert_eq!(to_row(DAY_START_MINUTES + 15), 1);
        assert_eq!(to_row(DAY_START_MINUTES + 29), 1);
    }

    #[test]
    fn test_to_row_clamps_to_grid() {
        assert_eq!(to_row(0), 0); // Before opening
        assert_eq!(to_row(8 * 60), 0);
        assert_eq!(to_row(23 * 60), TOTAL_ROWS); // After closing
    }

    #[test]
    fn test_row_to_time() {
        assert_eq!(row_to_time(0), "9:30");
        assert_eq!(row_to_time(2), "10:00");
        assert_eq!(row_to_time(TOTAL_ROWS), "16:00"); // End boundary of the last row
    }

    #[test]
    fn test_row_range_label() {
        assert_eq!(row_range_label(0, 2), "9:30-10:00");
        assert_eq!(row_range_label(25, 26), "15:45-16:00");
    }

    #[test]
    fn test_round_trip_all_rows() {
        for row in 0..TOTAL_ROWS {
            assert_eq!(to_row(row_to_minutes(row)), row);
        }
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("9:30"), Some(570));
        assert_eq!(parse_time("09:30"), Some(570));
        assert_eq!(parse_time("16:00"), Some(960));
        assert_eq!(parse_time("0:00"), Some(0));
    }

    #[test]
    fn test_parse_time_rejects_invalid() {
        assert_eq!(parse_time("930"), None);
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("9:60"), None);
        assert_eq!(parse_time("lunch"), None);
    }

    #[test]
    fn test_parse_format_round_trip() {
        for row in 0..=TOTAL_ROWS {
            assert_eq!(parse_time(&row_to_time(row)), Some(row_to_minutes(row)));
        }
    }
}
