//! Application-level control policy for an RGBW strip.
//!
//! [`LightStrip`] owns the white and RGB controllers and decides what a button
//! gesture, a potentiometer change or a transport command does to them. The
//! main loop owns the `LightStrip` and a
//! [`ButtonRecognizer`](crate::ButtonRecognizer) side by side:
//!
//! ```ignore
//! loop {
//!     button.service(&mut strip);
//!     strip.on_potentiometer(adc.read());
//!     strip.service();
//! }
//! ```

use heapless::String;

use crate::button::GestureHandler;
use crate::color::{PackedColor, WHITE};
use crate::command::StripCommand;
use crate::mono::MonochromeController;
use crate::output::{ChannelOutput, RgbOutput};
use crate::rgb::RgbAnimationController;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ChannelState, RgbMode};
use crate::wheel::{MAX_READING, mix};

/// Snapshot of both controllers for status and telemetry payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripStatus {
    pub white_state: ChannelState,
    pub white_intensity: u8,
    pub rgb_state: ChannelState,
    pub rgb_mode: RgbMode,
    pub rgb_color: PackedColor,
    pub rgb_speed: u16,
}

impl StripStatus {
    /// White intensity as reported to dashboards: 0 while the channel is off.
    pub fn reported_intensity(&self) -> u8 {
        if self.white_state.is_on() {
            self.white_intensity
        } else {
            0
        }
    }

    /// RGB mode as reported to dashboards: none while the channels are off.
    pub fn reported_mode(&self) -> Option<RgbMode> {
        self.rgb_state.is_on().then_some(self.rgb_mode)
    }

    /// Configured RGB color formatted as `#RRGGBB`.
    pub fn color_hex(&self) -> String<7> {
        self.rgb_color.to_hex()
    }
}

/// White plus RGB controllers under one control policy.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `W` - White channel output type
/// * `O` - RGB output type
/// * `T` - Time source implementation type
pub struct LightStrip<'t, I: TimeInstant, W: ChannelOutput, O: RgbOutput, T: TimeSource<I>> {
    white: MonochromeController<W>,
    rgb: RgbAnimationController<'t, I, O, T>,
    last_color: PackedColor,
    last_pot_level: Option<u16>,
}

impl<'t, I, W, O, T> LightStrip<'t, I, W, O, T>
where
    I: TimeInstant,
    W: ChannelOutput,
    O: RgbOutput,
    T: TimeSource<I>,
{
    /// Builds the strip in its power-up state: white on, RGB off.
    pub fn new(white: W, rgb: O, time_source: &'t T) -> Self {
        Self::from_parts(
            MonochromeController::new(white),
            RgbAnimationController::new(rgb, time_source),
        )
    }

    /// Takes already configured controllers and applies the power-up state.
    pub fn from_parts(
        mut white: MonochromeController<W>,
        mut rgb: RgbAnimationController<'t, I, O, T>,
    ) -> Self {
        rgb.turn_off();
        white.turn_on();

        Self {
            white,
            rgb,
            last_color: WHITE,
            last_pot_level: None,
        }
    }

    /// Advances the RGB animation. Call on every loop iteration.
    pub fn service(&mut self) {
        self.rgb.service();
    }

    /// Feeds a potentiometer reading (0-1023).
    ///
    /// Readings are compared at 8-bit resolution; nothing happens unless
    /// `reading / 4` changed since the last call. Then:
    /// - RGB on in `Normal`/`Strobe`: the reading picks the color on the wheel.
    /// - RGB on in `Flash`/`Fade`: the reading sets the animation speed.
    /// - Otherwise it sets the white intensity and turns white on.
    pub fn on_potentiometer(&mut self, reading: u16) {
        let reading = reading.min(MAX_READING);
        let level = reading / 4;
        if self.last_pot_level == Some(level) {
            return;
        }
        self.last_pot_level = Some(level);

        if self.rgb.get_state().is_on() {
            match self.rgb.get_mode() {
                RgbMode::Normal | RgbMode::Strobe => self.rgb.set_color(mix(reading)),
                RgbMode::Flash | RgbMode::Fade => self.rgb.set_speed(reading as i32),
            }
        } else {
            self.white.set_intensity(level as i32);
            if !self.white.get_state().is_on() {
                self.white.turn_on();
            }
        }
    }

    /// Applies a transport command and returns the resulting status.
    pub fn handle_command(&mut self, command: StripCommand) -> StripStatus {
        match command {
            StripCommand::White(state) => self.white.set_state(state),
            StripCommand::WhiteIntensity(intensity) => self.white.set_intensity(intensity),
            StripCommand::Rgb(state) => self.rgb.set_state(state),
            StripCommand::RgbColor(color) => self.rgb.set_color(color),
            StripCommand::RgbMode(mode) => self.rgb.set_mode(mode),
            StripCommand::RgbNextMode => {
                self.rgb.next_mode();
            }
            StripCommand::RgbSpeed(speed) => self.rgb.set_speed(speed),
            StripCommand::Next => self.on_short_press(),
            StripCommand::AllOff => self.on_long_press(),
        }
        self.status()
    }

    pub fn status(&self) -> StripStatus {
        StripStatus {
            white_state: self.white.get_state(),
            white_intensity: self.white.get_intensity(),
            rgb_state: self.rgb.get_state(),
            rgb_mode: self.rgb.get_mode(),
            rgb_color: self.rgb.get_color(),
            rgb_speed: self.rgb.speed(),
        }
    }

    pub fn white(&self) -> &MonochromeController<W> {
        &self.white
    }

    pub fn white_mut(&mut self) -> &mut MonochromeController<W> {
        &mut self.white
    }

    pub fn rgb(&self) -> &RgbAnimationController<'t, I, O, T> {
        &self.rgb
    }

    pub fn rgb_mut(&mut self) -> &mut RgbAnimationController<'t, I, O, T> {
        &mut self.rgb
    }
}

impl<'t, I, W, O, T> GestureHandler for LightStrip<'t, I, W, O, T>
where
    I: TimeInstant,
    W: ChannelOutput,
    O: RgbOutput,
    T: TimeSource<I>,
{
    /// Steps through white -> white + RGB white -> RGB modes -> white.
    fn on_short_press(&mut self) {
        let white_on = self.white.get_state().is_on();
        let rgb_on = self.rgb.get_state().is_on();

        if !white_on && !rgb_on {
            self.white.turn_on();
        } else if white_on && !rgb_on {
            // Full white on all four channels; the RGB color comes back later.
            self.white.set_intensity(u8::MAX as i32);
            self.last_color = self.rgb.get_color();
            self.rgb.set_color(WHITE);
            self.rgb.set_mode(RgbMode::Normal);
            self.rgb.turn_on();
        } else if self.rgb.get_mode() == RgbMode::Normal && self.rgb.get_color() == WHITE {
            self.white.turn_off();
            self.rgb.set_color(self.last_color);
            self.rgb.turn_on();
        } else if self.rgb.get_mode() == RgbMode::Fade {
            self.white.turn_on();
            self.rgb.next_mode();
            self.rgb.turn_off();
        } else {
            self.rgb.next_mode();
        }
    }

    /// Everything off.
    fn on_long_press(&mut self) {
        self.white.turn_off();
        self.rgb.turn_off();
    }
}
