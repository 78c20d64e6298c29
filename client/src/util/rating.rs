//! Star rating math.

use products::{MAX_RATE, Rating};

/// Number of stars drawn for every rating.
pub const STAR_COUNT: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarCounts {
    pub filled: u8,
    pub empty: u8,
}

/// Split [`STAR_COUNT`] stars into filled and empty for `rate`.
///
/// Filled stars are `floor(rate)` clamped to `0..=5`; half stars are never drawn.
pub fn star_counts(rate: f64) -> StarCounts {
    let clamped = if rate.is_finite() { rate.floor().clamp(0.0, MAX_RATE) } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = clamped as u8;
    StarCounts { filled, empty: STAR_COUNT - filled }
}

/// Text shown beside the stars, e.g. `4.7 (120 reviews)`.
pub fn rating_summary(rating: &Rating) -> String {
    format!("{} ({} reviews)", rating.rate, rating.count)
}

#[cfg(test)]
#[path = "rating_test.rs"]
mod rating_test;
