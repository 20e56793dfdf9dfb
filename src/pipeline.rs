//! Logical-to-physical color conversion.
//!
//! Every color written to the matrix passes through one pipeline: scale by
//! the brightness ceiling, scale by the current brightness percent, then map
//! each channel through the gamma table. All integer math.

use crate::Rgb;
use crate::gamma::ws2812_lut;

/// Brightness ceiling used when `set_bright_max` receives an out-of-range
/// value.
pub const DEFAULT_BRIGHT_MAX: u32 = 100;
/// Highest accepted brightness ceiling.
pub const BRIGHT_MAX_LIMIT: u32 = 200;

/// Brightness and gamma budget applied to every emitted color.
#[derive(Debug, Clone)]
pub struct ColorPipeline {
    bright_max: u32,
    percent: u8,
    lut: &'static [u8; 256],
}

impl ColorPipeline {
    pub const fn new() -> Self {
        Self {
            bright_max: DEFAULT_BRIGHT_MAX,
            percent: 100,
            lut: ws2812_lut(),
        }
    }

    /// Set the brightness ceiling, a fraction of full drive in `1..=200`
    /// parts of 255.
    ///
    /// Out-of-range values fall back to the default ceiling instead of
    /// erroring.
    pub fn set_bright_max(&mut self, value: u32) {
        self.bright_max = if (1..=BRIGHT_MAX_LIMIT).contains(&value) {
            value
        } else {
            DEFAULT_BRIGHT_MAX
        };
    }

    /// Current brightness percent.
    pub const fn brightness(&self) -> u8 {
        self.percent
    }

    /// Set the brightness percent, clamped into `1..=100`.
    pub fn set_brightness(&mut self, percent: u8) {
        self.percent = percent.clamp(1, 100);
    }

    /// Map a logical color onto the physically emitted one:
    /// `gamma_lut[channel * bright_max / 255 * percent / 100]`.
    pub fn convert(&self, color: Rgb) -> Rgb {
        Rgb {
            r: self.convert_channel(color.r),
            g: self.convert_channel(color.g),
            b: self.convert_channel(color.b),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn convert_channel(&self, value: u8) -> u8 {
        let scaled =
            u32::from(value) * self.bright_max * u32::from(self.percent) / 255 / 100;
        self.lut[scaled.min(255) as usize]
    }
}

impl Default for ColorPipeline {
    fn default() -> Self {
        Self::new()
    }
}
