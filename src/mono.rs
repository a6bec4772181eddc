//! Single-channel controller for the strip's white LEDs.

use crate::output::ChannelOutput;
use crate::types::ChannelState;

/// Controls one dimmable channel: on/off plus a stored intensity.
///
/// Every operation takes effect immediately; there is no animation.
/// Turning the channel off keeps the configured intensity for the next
/// [`turn_on`](Self::turn_on).
pub struct MonochromeController<O: ChannelOutput> {
    output: O,
    state: ChannelState,
    intensity: u8,
    duty: u8,
}

impl<O: ChannelOutput> MonochromeController<O> {
    /// Full brightness, applied on the first `turn_on`.
    pub const DEFAULT_INTENSITY: u8 = u8::MAX;

    /// Creates an idle controller with the output driven to zero duty.
    pub fn new(mut output: O) -> Self {
        output.set_duty(0);

        Self {
            output,
            state: ChannelState::Off,
            intensity: Self::DEFAULT_INTENSITY,
            duty: 0,
        }
    }

    /// Turns the channel on at the stored intensity.
    pub fn turn_on(&mut self) {
        self.state = ChannelState::On;
        self.write(self.intensity);
        #[cfg(feature = "defmt")]
        defmt::debug!("white on, intensity {}", self.intensity);
    }

    /// Drives the output to zero. The stored intensity is kept.
    pub fn turn_off(&mut self) {
        self.state = ChannelState::Off;
        self.write(0);
        #[cfg(feature = "defmt")]
        defmt::debug!("white off");
    }

    /// Flips the power state and returns the new one.
    pub fn toggle(&mut self) -> ChannelState {
        match self.state {
            ChannelState::On => self.turn_off(),
            ChannelState::Off => self.turn_on(),
        }
        self.state
    }

    pub fn set_state(&mut self, state: ChannelState) {
        match state {
            ChannelState::On => self.turn_on(),
            ChannelState::Off => self.turn_off(),
        }
    }

    /// Stores a new intensity, clamped to 0-255, and applies it if the
    /// channel is on. Never changes the power state.
    pub fn set_intensity(&mut self, intensity: i32) {
        self.intensity = intensity.clamp(0, u8::MAX as i32) as u8;
        if self.state.is_on() {
            self.write(self.intensity);
        }
    }

    pub fn get_state(&self) -> ChannelState {
        self.state
    }

    /// Returns the configured intensity, which may differ from what is
    /// rendered while the channel is off.
    pub fn get_intensity(&self) -> u8 {
        self.intensity
    }

    /// Returns the duty currently written to the output.
    pub fn duty(&self) -> u8 {
        self.duty
    }

    fn write(&mut self, duty: u8) {
        self.output.set_duty(duty);
        self.duty = duty;
    }
}
