//! Debounced push-button gesture recognition.
//!
//! [`ButtonRecognizer`] samples an input pin on every
//! [`service`](ButtonRecognizer::service) call and classifies presses into
//! short and long gestures without blocking:
//!
//! | Gesture     | Condition                                   | Delivered                 |
//! |-------------|---------------------------------------------|---------------------------|
//! | Long press  | held >= `long_press_ms`                     | once, at threshold        |
//! | Short press | released before `long_press_ms`             | once, on release          |
//!
//! A press that already produced a long press produces nothing on release.

use embedded_hal::digital::InputPin;

use crate::time::{TimeInstant, TimeSource, millis_between};

/// Electrical level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Pressed pulls the pin low (switch to ground, pull-up enabled).
    #[default]
    Low,
    /// Pressed drives the pin high.
    High,
}

/// Classified button interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    ShortPress,
    LongPress,
}

/// Receiver for recognized gestures.
///
/// Implemented by whatever owns the state a gesture should change, typically
/// the application's [`LightStrip`](crate::LightStrip).
pub trait GestureHandler {
    fn on_short_press(&mut self);
    fn on_long_press(&mut self);
}

/// Timing and polarity of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    pub active_level: ActiveLevel,
    /// How long a level must stay unchanged before it is trusted.
    pub debounce_ms: u32,
    /// Hold time that turns a press into a long press.
    pub long_press_ms: u32,
}

impl ButtonConfig {
    pub const DEFAULT_DEBOUNCE_MS: u32 = 50;
    pub const DEFAULT_LONG_PRESS_MS: u32 = 1000;

    pub const fn new(active_level: ActiveLevel) -> Self {
        Self {
            active_level,
            debounce_ms: Self::DEFAULT_DEBOUNCE_MS,
            long_press_ms: Self::DEFAULT_LONG_PRESS_MS,
        }
    }

    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub const fn with_long_press_ms(mut self, long_press_ms: u32) -> Self {
        self.long_press_ms = long_press_ms;
        self
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        ButtonConfig::new(ActiveLevel::default())
    }
}

#[derive(Debug, Clone, Copy)]
enum ButtonPhase<I> {
    Idle,
    Pressed { since: I, long_fired: bool },
}

/// Debounces one input pin and reports gestures.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input pin type
/// * `T` - Time source implementation type
pub struct ButtonRecognizer<'t, I: TimeInstant, P: InputPin, T: TimeSource<I>> {
    pin: P,
    time_source: &'t T,
    config: ButtonConfig,
    raw_pressed: bool,
    raw_since: I,
    stable_pressed: bool,
    phase: ButtonPhase<I>,
}

impl<'t, I: TimeInstant, P: InputPin, T: TimeSource<I>> ButtonRecognizer<'t, I, P, T> {
    /// Wraps an already configured input pin.
    ///
    /// The button is assumed released at construction; a button held during
    /// boot registers as a press once it has been stable for the debounce
    /// window.
    pub fn new(pin: P, time_source: &'t T, config: ButtonConfig) -> Self {
        Self {
            pin,
            time_source,
            config,
            raw_pressed: false,
            raw_since: time_source.now(),
            stable_pressed: false,
            phase: ButtonPhase::Idle,
        }
    }

    /// Samples the pin and delivers at most one gesture to `handler`.
    ///
    /// Call at short, regular intervals. Never blocks. Returns the gesture
    /// that was delivered, if any. A failed pin read skips the sample.
    pub fn service<H: GestureHandler + ?Sized>(&mut self, handler: &mut H) -> Option<Gesture> {
        let gesture = self.poll()?;
        match gesture {
            Gesture::ShortPress => handler.on_short_press(),
            Gesture::LongPress => handler.on_long_press(),
        }
        Some(gesture)
    }

    /// Like [`service`](Self::service) but only returns the gesture.
    pub fn poll(&mut self) -> Option<Gesture> {
        let now = self.time_source.now();
        let sample = self.read_pressed()?;

        if sample != self.raw_pressed {
            self.raw_pressed = sample;
            self.raw_since = now;
        }

        let settled = millis_between(now, self.raw_since) >= self.config.debounce_ms as u64;
        if settled && self.raw_pressed != self.stable_pressed {
            self.stable_pressed = self.raw_pressed;
            return if self.stable_pressed {
                self.on_press()
            } else {
                self.on_release()
            };
        }

        // Only count hold time while the contact is still closed; a release
        // waiting out its debounce window is decided in `on_release`.
        if let ButtonPhase::Pressed {
            since,
            long_fired: false,
        } = self.phase
        {
            if self.raw_pressed && millis_between(now, since) >= self.config.long_press_ms as u64 {
                self.phase = ButtonPhase::Pressed {
                    since,
                    long_fired: true,
                };
                return Some(self.fired(Gesture::LongPress));
            }
        }

        None
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Releases the input pin.
    pub fn free(self) -> P {
        self.pin
    }

    fn on_press(&mut self) -> Option<Gesture> {
        // The press started when the level first changed, not when the
        // debounce window closed.
        self.phase = ButtonPhase::Pressed {
            since: self.raw_since,
            long_fired: false,
        };
        None
    }

    fn on_release(&mut self) -> Option<Gesture> {
        let phase = core::mem::replace(&mut self.phase, ButtonPhase::Idle);
        match phase {
            ButtonPhase::Pressed {
                long_fired: true, ..
            } => None,
            ButtonPhase::Pressed {
                since,
                long_fired: false,
            } => {
                let held = millis_between(self.raw_since, since);
                if held >= self.config.long_press_ms as u64 {
                    // Threshold crossed between two samples.
                    Some(self.fired(Gesture::LongPress))
                } else {
                    Some(self.fired(Gesture::ShortPress))
                }
            }
            ButtonPhase::Idle => None,
        }
    }

    fn read_pressed(&mut self) -> Option<bool> {
        let level = match self.config.active_level {
            ActiveLevel::Low => self.pin.is_low(),
            ActiveLevel::High => self.pin.is_high(),
        };
        level.ok()
    }

    #[inline]
    fn fired(&self, gesture: Gesture) -> Gesture {
        #[cfg(feature = "defmt")]
        defmt::debug!("button {}", gesture);
        gesture
    }
}
