//! Identifier generation.
//!
//! IDs are time-based tokens (`recipient::<epoch_millis>`,
//! `gift::<epoch_millis>`). Creation is single-threaded per collection, so
//! nudging the clock value past the last issued one is enough to keep IDs
//! unique even when two creates land in the same millisecond.

use chrono::Utc;

/// Produce the milliseconds value for the next generated ID, strictly greater
/// than `last`.
pub(crate) fn next_millis(last: &mut u64) -> u64 {
    let now = Utc::now().timestamp_millis() as u64;
    *last = now.max(*last + 1);
    *last
}
