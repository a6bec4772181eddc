//! Command-based control for transport adapters.

use crate::color::PackedColor;
use crate::types::{ChannelState, RgbMode};

/// Operations a transport adapter (MQTT, serial, app widgets) can request.
///
/// Numeric payloads are passed through untouched; the controllers clamp them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripCommand {
    /// Switch the white channel on or off.
    White(ChannelState),
    /// Set white intensity (0-255).
    WhiteIntensity(i32),
    /// Switch the RGB channels on or off.
    Rgb(ChannelState),
    /// Set the packed RGB color.
    RgbColor(PackedColor),
    /// Select an animation mode.
    RgbMode(RgbMode),
    /// Advance to the next animation mode.
    RgbNextMode,
    /// Set animation speed (0-1023).
    RgbSpeed(i32),
    /// Same effect as a short press of the mode button.
    Next,
    /// Same effect as a long press of the mode button.
    AllOff,
}

impl StripCommand {
    /// Builds a color command from a raw integer, clamping it into range.
    pub fn color(value: i64) -> Self {
        StripCommand::RgbColor(PackedColor::from(value))
    }
}
