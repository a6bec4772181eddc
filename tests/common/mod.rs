//! Shared test infrastructure for rgbw-strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};
use rgbw_strip::{ChannelOutput, RgbColor, RgbOutput, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, millis: u64) {
        self.current_time.set(TestInstant(millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Outputs
// ============================================================================

/// Records every duty written to a white channel
pub struct ChannelLog {
    history: RefCell<heapless::Vec<u8, 1024>>,
}

impl ChannelLog {
    pub fn new() -> Self {
        Self {
            history: RefCell::new(heapless::Vec::new()),
        }
    }

    /// Last duty written, 0 if nothing was written yet
    pub fn duty(&self) -> u8 {
        self.history.borrow().last().copied().unwrap_or(0)
    }

    pub fn writes(&self) -> usize {
        self.history.borrow().len()
    }

    pub fn output(&self) -> MockChannel<'_> {
        MockChannel { log: self }
    }
}

/// Mock white channel writing into a [`ChannelLog`]
pub struct MockChannel<'a> {
    log: &'a ChannelLog,
}

impl ChannelOutput for MockChannel<'_> {
    fn set_duty(&mut self, duty: u8) {
        let _ = self.log.history.borrow_mut().push(duty);
    }
}

/// Records every color written to an RGB output
pub struct RgbLog {
    color_history: RefCell<heapless::Vec<RgbColor, 1024>>,
}

impl RgbLog {
    pub fn new() -> Self {
        Self {
            color_history: RefCell::new(heapless::Vec::new()),
        }
    }

    /// Last color written, black if nothing was written yet
    pub fn get_last_color(&self) -> RgbColor {
        self.color_history
            .borrow()
            .last()
            .copied()
            .unwrap_or(rgb(0, 0, 0))
    }

    pub fn writes(&self) -> usize {
        self.color_history.borrow().len()
    }

    pub fn output(&self) -> MockRgb<'_> {
        MockRgb { log: self }
    }
}

/// Mock RGB output writing into an [`RgbLog`]
pub struct MockRgb<'a> {
    log: &'a RgbLog,
}

impl RgbOutput for MockRgb<'_> {
    fn set_color(&mut self, color: RgbColor) {
        let _ = self.log.color_history.borrow_mut().push(color);
    }
}

// ============================================================================
// Mock Input Pin
// ============================================================================

/// Input pin whose level is driven by the test through a shared cell
pub struct MockPin<'a> {
    high: &'a Cell<bool>,
}

impl<'a> MockPin<'a> {
    pub fn new(high: &'a Cell<bool>) -> Self {
        Self { high }
    }
}

impl ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl InputPin for MockPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn rgb(red: u8, green: u8, blue: u8) -> RgbColor {
    RgbColor::new(red, green, blue)
}
