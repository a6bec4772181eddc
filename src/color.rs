//! Packed and per-channel color representations.
//!
//! Transport adapters speak in 24-bit packed integers (`0xRRGGBB`), the PWM
//! outputs want one byte per channel. [`PackedColor`] and [`RgbColor`]
//! convert into each other without loss.

use core::fmt::Write;

use heapless::String;
use palette::Srgb;

/// Per-channel 8-bit color, as written to the PWM outputs.
pub type RgbColor = Srgb<u8>;

/// A 24-bit color packed as `red << 16 | green << 8 | blue`.
///
/// Construction through [`From`] never fails: values outside
/// `0..=0xFFFFFF` are clamped into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedColor(u32);

impl PackedColor {
    /// Largest representable packed color (white).
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Creates a packed color, clamping anything above [`PackedColor::MAX`].
    #[inline]
    pub const fn new(value: u32) -> Self {
        if value > Self::MAX {
            PackedColor(Self::MAX)
        } else {
            PackedColor(value)
        }
    }

    /// Packs three channel intensities.
    #[inline]
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        PackedColor((red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Returns the raw 24-bit value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Decodes into per-channel form.
    #[inline]
    pub const fn to_rgb(self) -> RgbColor {
        Srgb::new(self.red(), self.green(), self.blue())
    }

    /// Formats as `#RRGGBB` for status payloads.
    pub fn to_hex(self) -> String<7> {
        let mut out = String::new();
        // 7 bytes always fit "#RRGGBB"
        let _ = write!(out, "#{:06X}", self.0);
        out
    }
}

impl From<u32> for PackedColor {
    fn from(value: u32) -> Self {
        PackedColor::new(value)
    }
}

impl From<i64> for PackedColor {
    fn from(value: i64) -> Self {
        PackedColor(value.clamp(0, Self::MAX as i64) as u32)
    }
}

impl From<i32> for PackedColor {
    fn from(value: i32) -> Self {
        PackedColor::from(value as i64)
    }
}

impl From<RgbColor> for PackedColor {
    fn from(color: RgbColor) -> Self {
        PackedColor::from_channels(color.red, color.green, color.blue)
    }
}

impl From<PackedColor> for RgbColor {
    fn from(color: PackedColor) -> Self {
        color.to_rgb()
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

pub const BLACK: PackedColor = PackedColor::new(0x000000);
pub const WHITE: PackedColor = PackedColor::new(0xFFFFFF);
pub const RED: PackedColor = PackedColor::new(0xFF0000);
pub const GREEN: PackedColor = PackedColor::new(0x00FF00);
pub const BLUE: PackedColor = PackedColor::new(0x0000FF);
pub const YELLOW: PackedColor = PackedColor::new(0xFFFF00);
pub const CYAN: PackedColor = PackedColor::new(0x00FFFF);
pub const MAGENTA: PackedColor = PackedColor::new(0xFF00FF);
pub const DARK_PURPLE: PackedColor = PackedColor::new(0x301934);

/// Hard-step palette for [`crate::RgbMode::Flash`].
pub const FLASH_PALETTE: [PackedColor; 7] = [RED, GREEN, BLUE, YELLOW, CYAN, MAGENTA, WHITE];

/// Hue loop for [`crate::RgbMode::Fade`]. Consecutive entries differ in a
/// single channel so each transition ramps exactly one output.
pub const FADE_PALETTE: [PackedColor; 6] = [MAGENTA, RED, YELLOW, GREEN, CYAN, BLUE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_roundtrip_through_packed_form() {
        let packed = PackedColor::new(0x12AB34);
        let rgb = packed.to_rgb();
        assert_eq!((rgb.red, rgb.green, rgb.blue), (0x12, 0xAB, 0x34));
        assert_eq!(PackedColor::from(rgb), packed);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(PackedColor::from(0x0100_0000u32).value(), 0xFFFFFF);
        assert_eq!(PackedColor::from(u32::MAX).value(), 0xFFFFFF);
        assert_eq!(PackedColor::from(-1i64).value(), 0);
        assert_eq!(PackedColor::from(i32::MIN).value(), 0);
        assert_eq!(PackedColor::from(0xFFFFFFi64).value(), 0xFFFFFF);
    }

    #[test]
    fn hex_string_is_zero_padded() {
        assert_eq!(PackedColor::new(0x01FF01).to_hex().as_str(), "#01FF01");
        assert_eq!(BLACK.to_hex().as_str(), "#000000");
    }

    #[test]
    fn fade_palette_steps_change_one_channel() {
        for (idx, from) in FADE_PALETTE.iter().enumerate() {
            let to = FADE_PALETTE[(idx + 1) % FADE_PALETTE.len()];
            let changed = [
                from.red() != to.red(),
                from.green() != to.green(),
                from.blue() != to.blue(),
            ];
            assert_eq!(changed.iter().filter(|c| **c).count(), 1);
        }
    }
}
