//! Bounded single-unit quality steps.
//!
//! Every rule is expressed as a series of these steps. Each step is clamped on
//! its own, so several increments in one day stop at the cap individually.

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;

/// Conventional quality of legendary stock. Not enforced.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Raise quality by one unless it is already at (or above) the cap.
pub fn increase(quality: &mut i32) {
    if *quality < MAX_QUALITY {
        *quality += 1;
    }
}

/// Lower quality by one unless it is already at (or below) the floor.
pub fn decrease(quality: &mut i32) {
    if *quality > MIN_QUALITY {
        *quality -= 1;
    }
}
