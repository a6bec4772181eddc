//! RGB animation controller.
//!
//! Provides [`RgbAnimationController`] which owns the color, mode and speed of
//! the strip's RGB channels and advances time-based animations across repeated
//! non-blocking [`service`](RgbAnimationController::service) calls.

use crate::animation::Phase;
use crate::color::{BLACK, DARK_PURPLE, PackedColor, RgbColor};
use crate::output::RgbOutput;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ChannelState, RgbMode, SpeedConfig, clamp_speed};

/// Drives three PWM channels through steady, strobe, flash and fade modes.
///
/// Configuration (color, mode, speed) is kept while the controller is off and
/// picked up again by [`turn_on`](Self::turn_on). Every setter clamps its input
/// and completes before returning, so callers never see a color that does not
/// match the current animation phase.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `O` - RGB output implementation type
/// * `T` - Time source implementation type
pub struct RgbAnimationController<'t, I: TimeInstant, O: RgbOutput, T: TimeSource<I>> {
    output: O,
    time_source: &'t T,
    config: SpeedConfig,
    state: ChannelState,
    color: PackedColor,
    mode: RgbMode,
    speed: u16,
    interval_ms: u32,
    phase: Phase<I>,
    current_color: RgbColor,
}

impl<'t, I: TimeInstant, O: RgbOutput, T: TimeSource<I>> RgbAnimationController<'t, I, O, T> {
    /// Color configured at construction.
    pub const DEFAULT_COLOR: PackedColor = DARK_PURPLE;

    /// Creates an idle controller with the default speed mapping.
    pub fn new(output: O, time_source: &'t T) -> Self {
        Self::with_config(output, time_source, SpeedConfig::default())
    }

    /// Creates an idle controller with all channels driven to zero.
    pub fn with_config(mut output: O, time_source: &'t T, config: SpeedConfig) -> Self {
        output.set_color(BLACK.to_rgb());

        let speed = SpeedConfig::DEFAULT_SPEED;
        Self {
            output,
            time_source,
            config,
            state: ChannelState::Off,
            color: Self::DEFAULT_COLOR,
            mode: RgbMode::Normal,
            speed,
            interval_ms: config.interval_ms(speed),
            phase: Phase::Steady,
            current_color: BLACK.to_rgb(),
        }
    }

    /// Turns the channels on and shows the first frame of the current mode.
    ///
    /// Calling this while already on re-applies the current frame without
    /// restarting the animation.
    pub fn turn_on(&mut self) {
        if self.state.is_on() {
            let frame = self.phase.frame(self.color, self.interval_ms);
            self.show(frame, true);
            return;
        }

        self.state = ChannelState::On;
        self.reset_phase();
        #[cfg(feature = "defmt")]
        defmt::debug!("rgb on, mode {}", self.mode);
    }

    /// Drives all three channels to zero. Configuration is kept.
    pub fn turn_off(&mut self) {
        self.state = ChannelState::Off;
        self.show(BLACK.to_rgb(), true);
        #[cfg(feature = "defmt")]
        defmt::debug!("rgb off");
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

    /// Sets the configured color. Anything above `0xFFFFFF` clamps to white,
    /// negative values to black.
    ///
    /// While on, the animation restarts from the new color: `Normal` and
    /// `Strobe` show it immediately.
    pub fn set_color(&mut self, color: impl Into<PackedColor>) {
        self.color = color.into();
        if self.state.is_on() {
            self.reset_phase();
        }
    }

    /// Switches the animation algorithm and restarts its phase.
    ///
    /// Does not turn the controller on.
    pub fn set_mode(&mut self, mode: RgbMode) {
        self.mode = mode;
        self.reset_phase();
        #[cfg(feature = "defmt")]
        defmt::debug!("rgb mode {}", mode);
    }

    /// Advances to the next mode in the cycle and returns it.
    pub fn next_mode(&mut self) -> RgbMode {
        self.set_mode(self.mode.next());
        self.mode
    }

    /// Sets the animation speed, clamped to 0-1023, and re-derives the step
    /// interval. Higher speed means a shorter interval.
    ///
    /// The running phase is kept; the new interval applies from the next step.
    pub fn set_speed(&mut self, speed: i32) {
        self.speed = clamp_speed(speed);
        self.interval_ms = self.config.interval_ms(self.speed);
        #[cfg(feature = "defmt")]
        defmt::trace!("rgb speed {} -> {}ms", self.speed, self.interval_ms);
    }

    /// Advances the animation. Call on every iteration of the control loop.
    ///
    /// Never blocks. Does nothing while the controller is off.
    pub fn service(&mut self) {
        if !self.state.is_on() {
            return;
        }

        let now = self.time_source.now();
        if let Some(frame) = self.phase.advance(now, self.color, self.interval_ms) {
            self.show(frame, false);
        }
    }

    pub fn get_state(&self) -> ChannelState {
        self.state
    }

    /// Returns the configured color, not necessarily the one on display.
    pub fn get_color(&self) -> PackedColor {
        self.color
    }

    /// Returns the configured color split into channels.
    pub fn get_rgb_color(&self) -> RgbColor {
        self.color.to_rgb()
    }

    pub fn get_mode(&self) -> RgbMode {
        self.mode
    }

    pub fn speed(&self) -> u16 {
        self.speed
    }

    /// Returns the step interval derived from the current speed.
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Returns the color currently written to the outputs.
    pub fn current_color(&self) -> RgbColor {
        self.current_color
    }

    /// Restarts the phase for the current mode at the current time and, if
    /// on, shows its first frame.
    fn reset_phase(&mut self) {
        self.phase = Phase::start(self.mode, self.time_source.now());
        if self.state.is_on() {
            let frame = self.phase.frame(self.color, self.interval_ms);
            self.show(frame, true);
        }
    }

    fn show(&mut self, color: RgbColor, force: bool) {
        if force || color != self.current_color {
            self.output.set_color(color);
            self.current_color = color;
        }
    }
}
