//! Animation engine and its frame/color generators.
//!
//! The engine owns the current animation selection and composes two
//! independent cursors into one per-tick call: the frame cursor walks the
//! definition's bitmask table, the color cursor walks the caller-supplied
//! gradient. Their cycle lengths may differ, which is what layers e.g. a
//! breathing color under a differently-timed frame sequence.

mod catalog;
mod colors;
mod frames;

use embassy_time::Duration;
use heapless::Vec;

pub use catalog::{AnimationDefinition, AnimationId, FrameMask, FULL_GRID};

use crate::Rgb;
use colors::ColorCycle;
use frames::FrameCursor;

/// Render period used when a definition does not set one.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(200);
/// Gradient step count used when a definition does not set one.
pub const DEFAULT_STEPS: u16 = 20;
/// Loop flag used when a definition does not set one.
pub const DEFAULT_LOOPS: bool = true;

/// Errors from animation selection.
///
/// Selection is atomic: on any error the previously selected animation
/// keeps playing untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError {
    /// The raw id does not name a catalog entry.
    UnknownAnimation,
    /// The definition's frame table is empty.
    EmptyFrames,
    /// The caller passed no color stops.
    EmptyColors,
    /// More color stops than the engine can hold.
    TooManyColors,
}

#[derive(Debug, Clone)]
struct Playback<const MAX_STOPS: usize> {
    frames: FrameCursor,
    colors: ColorCycle<MAX_STOPS>,
    period: Duration,
    loops: bool,
}

/// Owns the current animation selection.
///
/// `MAX_STOPS` bounds the number of color stops a selection can carry.
#[derive(Debug, Clone, Default)]
pub struct AnimationEngine<const MAX_STOPS: usize> {
    current: Option<Playback<MAX_STOPS>>,
}

impl<const MAX_STOPS: usize> AnimationEngine<MAX_STOPS> {
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Select the animation to play, with the color stops to cycle through.
    ///
    /// Validates fully before committing: a failed selection leaves the
    /// previous animation playing. On success both cursors are reset and the
    /// definition's period/steps/loops are adopted, falling back to the
    /// engine defaults where the definition omits them.
    pub fn select_animation(
        &mut self,
        id: AnimationId,
        stops: &[Rgb],
    ) -> Result<(), AnimationError> {
        let definition = id.definition();
        if definition.frames.is_empty() {
            return Err(AnimationError::EmptyFrames);
        }
        if stops.is_empty() {
            return Err(AnimationError::EmptyColors);
        }
        let stops =
            Vec::from_slice(stops).map_err(|()| AnimationError::TooManyColors)?;

        let steps = definition.steps.unwrap_or(DEFAULT_STEPS);
        self.current = Some(Playback {
            frames: FrameCursor::new(definition.frames),
            colors: ColorCycle::new(stops, steps),
            period: definition.period.unwrap_or(DEFAULT_PERIOD),
            loops: definition.loops.unwrap_or(DEFAULT_LOOPS),
        });

        Ok(())
    }

    /// Select an animation by raw id, as received from a config byte or a
    /// provisioning message.
    pub fn select_animation_raw(
        &mut self,
        raw: u8,
        stops: &[Rgb],
    ) -> Result<(), AnimationError> {
        let id = AnimationId::from_raw(raw).ok_or(AnimationError::UnknownAnimation)?;
        self.select_animation(id, stops)
    }

    /// Return the current `(remaining, frame, color)` and advance both
    /// cursors by one call.
    ///
    /// Postcondition: the engine always wraps. `remaining == 0` marks the
    /// last frame of a cycle but the next call starts the sequence over;
    /// for an animation with `loops() == false` the caller must stop
    /// requesting frames once it observes `remaining == 0`, typically by
    /// deregistering its render worker.
    pub fn get_frame_and_color(&mut self) -> Option<(usize, FrameMask, Rgb)> {
        let playback = self.current.as_mut()?;
        let (remaining, mask) = playback.frames.next();
        let color = playback.colors.next();
        Some((remaining, mask, color))
    }

    /// Render period of the selected animation.
    pub fn period(&self) -> Option<Duration> {
        self.current.as_ref().map(|playback| playback.period)
    }

    /// Whether the selected animation is meant to play continuously.
    pub fn loops(&self) -> Option<bool> {
        self.current.as_ref().map(|playback| playback.loops)
    }

    /// Override the gradient step count of the current selection,
    /// restarting the color cycle.
    pub fn set_steps(&mut self, steps: u16) {
        if let Some(playback) = self.current.as_mut() {
            playback.colors.set_steps(steps);
        }
    }
}
