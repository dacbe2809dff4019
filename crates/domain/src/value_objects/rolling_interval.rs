//! Rolling interval arithmetic
//!
//! Key validity is expressed in 10-minute intervals counted from the Unix epoch.

/// Number of 10-minute rolling intervals in one day
pub const INTERVALS_PER_DAY: u32 = 144;

/// First interval of the day containing `interval`
///
/// Negative inputs floor toward negative infinity so the result is always a
/// multiple of [`INTERVALS_PER_DAY`].
#[must_use]
pub const fn day_first_interval(interval: i64) -> i64 {
    interval.div_euclid(INTERVALS_PER_DAY as i64) * INTERVALS_PER_DAY as i64
}

/// Whether `interval` sits on a day boundary
#[must_use]
pub const fn is_day_aligned(interval: u32) -> bool {
    interval % INTERVALS_PER_DAY == 0
}
