//! Core state types shared by the controllers.

use crate::wheel::MAX_READING;

/// Power state of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelState {
    On,
    #[default]
    Off,
}

impl ChannelState {
    #[inline]
    pub fn is_on(self) -> bool {
        self == ChannelState::On
    }
}

impl From<bool> for ChannelState {
    fn from(on: bool) -> Self {
        if on { ChannelState::On } else { ChannelState::Off }
    }
}

/// Animation algorithm driven by the RGB controller.
///
/// Modes form a cycle: `Normal -> Strobe -> Flash -> Fade -> Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbMode {
    /// Steady configured color.
    #[default]
    Normal,

    /// Configured color blinking against black.
    Strobe,

    /// Hard steps through the flash palette.
    Flash,

    /// Linear blend around the fade palette.
    Fade,
}

impl RgbMode {
    /// All modes in cycle order.
    pub const ALL: [RgbMode; 4] = [RgbMode::Normal, RgbMode::Strobe, RgbMode::Flash, RgbMode::Fade];

    /// Cyclic successor.
    pub const fn next(self) -> RgbMode {
        match self {
            RgbMode::Normal => RgbMode::Strobe,
            RgbMode::Strobe => RgbMode::Flash,
            RgbMode::Flash => RgbMode::Fade,
            RgbMode::Fade => RgbMode::Normal,
        }
    }

    /// Upper-case name used in status payloads.
    pub const fn name(self) -> &'static str {
        match self {
            RgbMode::Normal => "NORMAL",
            RgbMode::Strobe => "STROBE",
            RgbMode::Flash => "FLASH",
            RgbMode::Fade => "FADE",
        }
    }

    /// Parses a mode name, ignoring case and surrounding whitespace.
    ///
    /// Matches on prefix, so `"fade\r\n"` or `"Strobe mode"` are accepted.
    pub fn from_name(name: &str) -> Result<RgbMode, ModeError> {
        let name = name.trim();
        RgbMode::ALL
            .into_iter()
            .find(|mode| {
                let expected = mode.name();
                name.len() >= expected.len()
                    && name.as_bytes()[..expected.len()].eq_ignore_ascii_case(expected.as_bytes())
            })
            .ok_or(ModeError::UnknownName)
    }

    /// 1-based position in a mode menu (Normal = 1 ... Fade = 4).
    pub const fn menu_index(self) -> u8 {
        match self {
            RgbMode::Normal => 1,
            RgbMode::Strobe => 2,
            RgbMode::Flash => 3,
            RgbMode::Fade => 4,
        }
    }
}

impl TryFrom<u8> for RgbMode {
    type Error = ModeError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            1 => Ok(RgbMode::Normal),
            2 => Ok(RgbMode::Strobe),
            3 => Ok(RgbMode::Flash),
            4 => Ok(RgbMode::Fade),
            other => Err(ModeError::InvalidIndex(other)),
        }
    }
}

/// Mode conversion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeError {
    /// Menu index outside 1-4.
    InvalidIndex(u8),

    /// Name does not start with any mode name.
    UnknownName,
}

impl core::fmt::Display for ModeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ModeError::InvalidIndex(index) => {
                write!(f, "mode index {} is outside 1-4", index)
            }
            ModeError::UnknownName => {
                write!(f, "expected one of NORMAL, STROBE, FLASH, FADE")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ModeError {}

/// Maps animation speed (potentiometer scale) onto a step interval.
///
/// `interval = clamp(max_interval_ms - ms_per_step * speed, min_interval_ms, max_interval_ms)`,
/// so turning the knob up makes animations faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedConfig {
    pub max_interval_ms: u32,
    pub min_interval_ms: u32,
    pub ms_per_step: u32,
}

impl SpeedConfig {
    /// Speed applied at construction.
    pub const DEFAULT_SPEED: u16 = 512;

    pub const fn new(max_interval_ms: u32, min_interval_ms: u32, ms_per_step: u32) -> Self {
        Self {
            max_interval_ms,
            min_interval_ms,
            ms_per_step,
        }
    }

    /// Step interval for a speed already clamped to `0..=1023`.
    pub fn interval_ms(&self, speed: u16) -> u32 {
        let reduction = self.ms_per_step.saturating_mul(speed as u32);
        self.max_interval_ms
            .saturating_sub(reduction)
            .clamp(self.min_interval_ms.min(self.max_interval_ms), self.max_interval_ms)
    }
}

impl Default for SpeedConfig {
    fn default() -> Self {
        SpeedConfig::new(1050, 25, 1)
    }
}

/// Clamps a raw speed value onto the potentiometer range.
#[inline]
pub fn clamp_speed(speed: i32) -> u16 {
    speed.clamp(0, MAX_READING as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_cycle_has_length_four() {
        for mode in RgbMode::ALL {
            assert_eq!(mode.next().next().next().next(), mode);
            assert_ne!(mode.next(), mode);
        }
    }

    #[test]
    fn mode_names_parse_case_insensitively() {
        assert_eq!(RgbMode::from_name("fade"), Ok(RgbMode::Fade));
        assert_eq!(RgbMode::from_name("  Strobe\r\n"), Ok(RgbMode::Strobe));
        assert_eq!(RgbMode::from_name("FLASH now"), Ok(RgbMode::Flash));
        assert_eq!(RgbMode::from_name("fad"), Err(ModeError::UnknownName));
        assert_eq!(RgbMode::from_name(""), Err(ModeError::UnknownName));
    }

    #[test]
    fn menu_index_roundtrips() {
        for mode in RgbMode::ALL {
            assert_eq!(RgbMode::try_from(mode.menu_index()), Ok(mode));
        }
        assert_eq!(RgbMode::try_from(0), Err(ModeError::InvalidIndex(0)));
        assert_eq!(RgbMode::try_from(5), Err(ModeError::InvalidIndex(5)));
    }

    #[test]
    fn interval_shrinks_with_speed() {
        let config = SpeedConfig::default();
        assert_eq!(config.interval_ms(0), 1050);
        assert_eq!(config.interval_ms(512), 538);
        assert_eq!(config.interval_ms(1023), 27);

        let mut previous = u32::MAX;
        for speed in 0..=1023 {
            let interval = config.interval_ms(speed);
            assert!(interval <= previous);
            previous = interval;
        }
    }

    #[test]
    fn interval_is_clamped_to_minimum() {
        let config = SpeedConfig::new(1000, 100, 5);
        assert_eq!(config.interval_ms(1023), 100);
        assert_eq!(config.interval_ms(0), 1000);
    }

    #[test]
    fn speed_is_clamped_to_pot_range() {
        assert_eq!(clamp_speed(-5), 0);
        assert_eq!(clamp_speed(2048), 1023);
        assert_eq!(clamp_speed(700), 700);
    }
}
