//! Cyclic gradient cursor over an animation's color stops.

use heapless::Vec;

use crate::Rgb;

/// Produces the animation color sequence, one color per call.
///
/// A single stop yields that constant color forever. With `N >= 2` stops the
/// cursor interpolates per channel between consecutive stops, `steps`
/// intermediate colors per segment, and the last stop wraps back to the
/// first. The full cycle length is `N * steps`, independent of the frame
/// cycle length, so color and frame phases drift relative to each other.
#[derive(Debug, Clone)]
pub(crate) struct ColorCycle<const MAX_STOPS: usize> {
    stops: Vec<Rgb, MAX_STOPS>,
    steps: u32,
    position: u32,
}

impl<const MAX_STOPS: usize> ColorCycle<MAX_STOPS> {
    pub(crate) fn new(stops: Vec<Rgb, MAX_STOPS>, steps: u16) -> Self {
        Self {
            stops,
            steps: u32::from(steps.max(1)),
            position: 0,
        }
    }

    /// Change the gradient step count, restarting the cycle.
    pub(crate) fn set_steps(&mut self, steps: u16) {
        self.steps = u32::from(steps.max(1));
        self.position = 0;
    }

    /// Return the current color and advance the cursor.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn next(&mut self) -> Rgb {
        if self.stops.len() == 1 {
            return self.stops[0];
        }

        let segment = (self.position / self.steps) as usize;
        let step = self.position % self.steps + 1;

        let from = self.stops[segment];
        let to = self.stops[(segment + 1) % self.stops.len()];
        let color = Rgb {
            r: interpolate(from.r, to.r, step, self.steps),
            g: interpolate(from.g, to.g, step, self.steps),
            b: interpolate(from.b, to.b, step, self.steps),
        };

        self.position += 1;
        if self.position >= self.stops.len() as u32 * self.steps {
            self.position = 0;
        }

        color
    }
}

/// Linear interpolation with integer truncation:
/// `from + (to - from) * step / steps`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
fn interpolate(from: u8, to: u8, step: u32, steps: u32) -> u8 {
    let delta = (i32::from(to) - i32::from(from)) * step as i32 / steps as i32;
    (i32::from(from) + delta) as u8
}
