//! Time base for the classifier
//!
//! All timestamps are fixed-width unsigned milliseconds that are allowed to
//! wrap. Elapsed time is always computed with wrapping subtraction, which
//! yields the right answer across one wrap boundary.
//!
//! # Maximum gap between polls
//!
//! A timer can only be measured correctly while the real elapsed time fits
//! into [`Ticks`]. Timers are compared against configured delays, so the
//! practical limit is half the range of the type: keep every gap between two
//! polls, and every configured delay, below [`MAX_TICK_GAP`]. Exceeding it is
//! a platform constraint that is not detected at run time.

/// Fixed-width millisecond timestamp
pub type Ticks = u16;

/// Largest gap between two polls that keeps all timers well defined
pub const MAX_TICK_GAP: Ticks = Ticks::MAX / 2;

/// Time passed from `since` to `now`, tolerating one wrap of the counter
#[inline]
pub const fn elapsed(now: Ticks, since: Ticks) -> Ticks {
    now.wrapping_sub(since)
}

/// Source of monotonic timestamps
pub trait Clock {
    /// Current time, truncated to [`Ticks`]
    fn now(&self) -> Ticks;
}
