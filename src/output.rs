//! Output traits for the PWM channels, plus `embedded-hal` adapters.

use embedded_hal::pwm::SetDutyCycle;

use crate::color::RgbColor;

/// A single dimmable channel, such as the white LED of the strip.
///
/// Duty is 0-255. Handle any hardware errors internally - this method
/// cannot fail.
pub trait ChannelOutput {
    fn set_duty(&mut self, duty: u8);
}

/// Three channels updated together.
///
/// Implementations should write all three channels before returning so a
/// caller never observes a half-applied color.
pub trait RgbOutput {
    fn set_color(&mut self, color: RgbColor);
}

/// How the strip's LEDs are wired to the driver transistors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Common cathode: higher duty, brighter LED.
    #[default]
    CommonCathode,
    /// Common anode: the duty cycle is inverted.
    CommonAnode,
}

impl Polarity {
    #[inline]
    fn apply(self, duty: u8) -> u8 {
        match self {
            Polarity::CommonCathode => duty,
            Polarity::CommonAnode => u8::MAX - duty,
        }
    }
}

/// [`ChannelOutput`] over any `embedded-hal` PWM channel.
pub struct PwmChannel<P: SetDutyCycle> {
    pwm: P,
    polarity: Polarity,
}

impl<P: SetDutyCycle> PwmChannel<P> {
    pub fn new(pwm: P, polarity: Polarity) -> Self {
        Self { pwm, polarity }
    }

    /// Releases the underlying PWM channel.
    pub fn free(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> ChannelOutput for PwmChannel<P> {
    fn set_duty(&mut self, duty: u8) {
        let duty = self.polarity.apply(duty);
        // Scales onto the channel's own max duty cycle.
        let _ = self.pwm.set_duty_cycle_fraction(duty as u16, u8::MAX as u16);
    }
}

/// [`RgbOutput`] built from three PWM channels.
pub struct PwmRgb<R: SetDutyCycle, G: SetDutyCycle, B: SetDutyCycle> {
    red: PwmChannel<R>,
    green: PwmChannel<G>,
    blue: PwmChannel<B>,
}

impl<R, G, B> PwmRgb<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// # Arguments
    /// * `red` - PWM channel for red LED
    /// * `green` - PWM channel for green LED
    /// * `blue` - PWM channel for blue LED
    /// * `polarity` - wiring shared by all three channels
    pub fn new(red: R, green: G, blue: B, polarity: Polarity) -> Self {
        Self {
            red: PwmChannel::new(red, polarity),
            green: PwmChannel::new(green, polarity),
            blue: PwmChannel::new(blue, polarity),
        }
    }

    /// Releases the three PWM channels.
    pub fn free(self) -> (R, G, B) {
        (self.red.free(), self.green.free(), self.blue.free())
    }
}

impl<R, G, B> RgbOutput for PwmRgb<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_color(&mut self, color: RgbColor) {
        self.red.set_duty(color.red);
        self.green.set_duty(color.green);
        self.blue.set_duty(color.blue);
    }
}
