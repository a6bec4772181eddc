//! Potentiometer reading to color mapping.
//!
//! The 10-bit reading sweeps a three-sector hue wheel: red to green, green to
//! blue, blue back to red. Inside each sector one channel ramps down, the next
//! ramps up, and the third is held at 1.
//!
//! Channel values are computed as `256 - t` and `t` and then truncated to
//! their low byte, so the start of each sector reads 0 on the ramping-down
//! channel rather than 255. Status payloads and stored colors depend on this
//! exact output.

use crate::color::PackedColor;

/// Highest reading the 10-bit analog input can produce.
pub const MAX_READING: u16 = 1023;

const SECTOR_2_START: u16 = 341;
const SECTOR_3_START: u16 = 682;
// Sector 3 rebases on 683, one past its first reading.
const SECTOR_3_BASE: i32 = 683;

/// Maps a potentiometer reading onto the hue wheel.
///
/// Readings above [`MAX_READING`] are clamped.
pub fn mix(reading: u16) -> PackedColor {
    let value = reading.min(MAX_READING) as i32;

    let (red, green, blue) = if value < SECTOR_2_START as i32 {
        let t = (value * 3) / 4;
        (256 - t, t, 1)
    } else if value < SECTOR_3_START as i32 {
        let t = ((value - SECTOR_2_START as i32) * 3) / 4;
        (1, 256 - t, t)
    } else {
        // Truncating division: reading 682 yields t = 0.
        let t = ((value - SECTOR_3_BASE) * 3) / 4;
        (t, 1, 256 - t)
    };

    PackedColor::new(((red & 0xFF) << 16 | (green & 0xFF) << 8 | (blue & 0xFF)) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_wheel_masks_red_to_zero() {
        assert_eq!(mix(0).value(), 1);
    }

    #[test]
    fn end_of_first_sector() {
        assert_eq!(mix(340).value(), 0x01FF01);
    }

    #[test]
    fn start_of_second_and_third_sector() {
        assert_eq!(mix(341).value(), 0x010000);
        assert_eq!(mix(682).value(), 0x000100);
        assert_eq!(mix(683).value(), 0x000100);
    }

    #[test]
    fn end_of_wheel() {
        // t = (340 * 3) / 4 = 255
        assert_eq!(mix(1023).value(), 0xFF0101);
    }

    #[test]
    fn one_channel_held_and_the_others_sum_to_256() {
        for reading in 0..=MAX_READING {
            let color = mix(reading);
            let (r, g, b) = (color.red() as u32, color.green() as u32, color.blue() as u32);
            let (held, pair) = if reading < SECTOR_2_START {
                (b, r + g)
            } else if reading < SECTOR_3_START {
                (r, g + b)
            } else {
                (g, r + b)
            };
            assert_eq!(held, 1, "reading {reading}");
            assert_eq!(pair % 256, 0, "reading {reading}");
        }
    }

    #[test]
    fn readings_above_range_are_clamped() {
        assert_eq!(mix(4095), mix(1023));
        assert_eq!(mix(u16::MAX), mix(1023));
    }
}
