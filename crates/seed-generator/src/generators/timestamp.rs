//! Timestamp value generators.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Generate a random timestamp in `[start, end]` at millisecond resolution.
///
/// The lower bound is rounded up to a whole millisecond so the result never
/// precedes `start`. If no whole millisecond lies in the range the start is
/// returned.
pub fn generate_timestamp_between<R: Rng>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let start_ms =
        start.timestamp_millis() + i64::from(start.timestamp_subsec_nanos() % 1_000_000 != 0);
    let end_ms = end.timestamp_millis();

    if start_ms >= end_ms {
        return start;
    }

    let random_ms = rng.gen_range(start_ms..=end_ms);
    DateTime::from_timestamp_millis(random_ms).unwrap_or(start)
}
