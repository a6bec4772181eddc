#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonRecognizer`**: Debounces the mode button and classifies short / long presses
//! - **`GestureHandler`**: Trait implemented by whatever reacts to gestures
//! - **`MonochromeController`**: On/off and intensity for the white channel
//! - **`RgbAnimationController`**: Color, mode and speed for the RGB channels, animated by `service()`
//! - **`RgbMode`**: `Normal`, `Strobe`, `Flash`, `Fade`, cycled with `next()`
//! - **`mix`**: Potentiometer reading to hue-wheel color
//! - **`LightStrip`**: The control policy tying gestures, potentiometer and commands together
//! - **`ChannelOutput`** / **`RgbOutput`**: Traits to implement for your PWM hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Colors travel as [`PackedColor`] (`0xRRGGBB`) through the command surface and
//! as [`RgbColor`] (`Srgb<u8>`) to the outputs.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod animation;
pub mod button;
pub mod color;
pub mod command;
pub mod mono;
pub mod output;
pub mod rgb;
pub mod strip;
pub mod time;
pub mod types;
pub mod wheel;

pub use button::{ActiveLevel, ButtonConfig, ButtonRecognizer, Gesture, GestureHandler};
pub use color::{PackedColor, RgbColor};
pub use command::StripCommand;
pub use mono::MonochromeController;
pub use output::{ChannelOutput, Polarity, PwmChannel, PwmRgb, RgbOutput};
pub use rgb::RgbAnimationController;
pub use strip::{LightStrip, StripStatus};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ChannelState, ModeError, RgbMode, SpeedConfig};
pub use wheel::mix;
