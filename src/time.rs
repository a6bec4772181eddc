//! Monotonic clock abstraction used for all non-blocking timing.
//!
//! Controllers never read a global timer. They hold a reference to a
//! [`TimeSource`] and query it whenever an animation or a button needs to
//! know how much time has passed, which keeps them deterministic under test.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Duration since an earlier instant. Must saturate to zero if `earlier`
    /// is actually later.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Milliseconds elapsed between `earlier` and `now`.
#[inline]
pub(crate) fn millis_between<I: TimeInstant>(now: I, earlier: I) -> u64 {
    now.duration_since(earlier).as_millis()
}
