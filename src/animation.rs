//! Per-mode animation progress and frame computation.
//!
//! A [`Phase`] is the minimal state needed to resume an animation on the next
//! non-blocking `service()` call. Each variant belongs to exactly one
//! [`RgbMode`]; switching modes always builds a fresh phase with
//! [`Phase::start`].

use palette::{Mix, Srgb};

use crate::color::{BLACK, FADE_PALETTE, FLASH_PALETTE, PackedColor, RgbColor};
use crate::time::{TimeInstant, millis_between};
use crate::types::RgbMode;

/// Animation progress for the current mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase<I> {
    /// `Normal`: nothing to track.
    Steady,

    /// `Strobe`: time of the last toggle and whether the color is showing.
    Strobe { last_toggle: I, lit: bool },

    /// `Flash`: time of the last step and the palette entry on display.
    Flash { last_step: I, index: usize },

    /// `Fade`: time of the last service, the palette entry being left and the
    /// time spent blending towards its successor.
    Fade {
        last_tick: I,
        index: usize,
        elapsed_ms: u64,
    },
}

impl<I: TimeInstant> Phase<I> {
    /// Initial phase for `mode`, anchored at `now`.
    pub fn start(mode: RgbMode, now: I) -> Self {
        match mode {
            RgbMode::Normal => Phase::Steady,
            RgbMode::Strobe => Phase::Strobe {
                last_toggle: now,
                lit: true,
            },
            RgbMode::Flash => Phase::Flash {
                last_step: now,
                index: 0,
            },
            RgbMode::Fade => Phase::Fade {
                last_tick: now,
                index: 0,
                elapsed_ms: 0,
            },
        }
    }

    /// Frame for the current position, without advancing.
    pub fn frame(&self, color: PackedColor, interval_ms: u32) -> RgbColor {
        match *self {
            Phase::Steady => color.to_rgb(),
            Phase::Strobe { lit, .. } => strobe_frame(color, lit),
            Phase::Flash { index, .. } => flash_frame(index),
            Phase::Fade {
                index, elapsed_ms, ..
            } => fade_frame(index, fade_progress(elapsed_ms, interval_ms)),
        }
    }

    /// Advances the phase to `now`.
    ///
    /// Returns the frame to render when the output has to change, `None`
    /// when the current frame stays valid.
    pub fn advance(&mut self, now: I, color: PackedColor, interval_ms: u32) -> Option<RgbColor> {
        let interval = interval_ms as u64;

        match self {
            Phase::Steady => Some(color.to_rgb()),
            Phase::Strobe { last_toggle, lit } => {
                if millis_between(now, *last_toggle) < interval {
                    return None;
                }
                *lit = !*lit;
                *last_toggle = now;
                Some(strobe_frame(color, *lit))
            }
            Phase::Flash { last_step, index } => {
                if millis_between(now, *last_step) < interval {
                    return None;
                }
                *index = (*index + 1) % FLASH_PALETTE.len();
                *last_step = now;
                Some(flash_frame(*index))
            }
            Phase::Fade {
                last_tick,
                index,
                elapsed_ms,
            } => {
                *elapsed_ms += millis_between(now, *last_tick);
                *last_tick = now;

                // Overshoot is dropped: each transition starts from zero.
                if *elapsed_ms >= interval {
                    *index = (*index + 1) % FADE_PALETTE.len();
                    *elapsed_ms = 0;
                }
                Some(fade_frame(*index, fade_progress(*elapsed_ms, interval_ms)))
            }
        }
    }
}

#[inline]
fn strobe_frame(color: PackedColor, lit: bool) -> RgbColor {
    if lit { color.to_rgb() } else { BLACK.to_rgb() }
}

/// Fraction of a fade transition completed after `elapsed_ms`.
#[inline]
fn fade_progress(elapsed_ms: u64, interval_ms: u32) -> f32 {
    if interval_ms == 0 {
        1.0
    } else {
        elapsed_ms as f32 / interval_ms as f32
    }
}

/// Flash palette entry at `index`, wrapping past the end.
#[inline]
pub fn flash_frame(index: usize) -> RgbColor {
    FLASH_PALETTE[index % FLASH_PALETTE.len()].to_rgb()
}

/// Blend between fade palette entry `index` and its successor.
///
/// Progress is clamped to 0.0-1.0. The endpoints return the palette entries
/// themselves, so a full cycle accumulates no rounding.
pub fn fade_frame(index: usize, progress: f32) -> RgbColor {
    let from = FADE_PALETTE[index % FADE_PALETTE.len()];
    let to = FADE_PALETTE[(index + 1) % FADE_PALETTE.len()];

    if progress <= 0.0 {
        return from.to_rgb();
    }
    if progress >= 1.0 {
        return to.to_rgb();
    }

    let from: Srgb<f32> = from.to_rgb().into_format();
    let to: Srgb<f32> = to.to_rgb().into_format();
    from.mix(to, progress).into_format()
}
