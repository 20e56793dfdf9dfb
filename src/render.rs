//! Render worker: one tick-fire worth of animation output.

use crate::animation::AnimationEngine;
use crate::config::BLACK;
use crate::pipeline::ColorPipeline;
use crate::surface::Surface;
use crate::LedBus;

/// Drives the selected animation onto the surface.
///
/// This is the composition the scheduler's render worker runs on every
/// fire: pull `(remaining, frame, color)` from the engine, convert the color
/// through the pipeline, paint the frame mask, flush. The returned
/// `remaining` lets the owner deregister the worker once a one-shot
/// animation reports 0.
pub struct AnimationRenderer<B: LedBus, const CELLS: usize, const MAX_STOPS: usize> {
    engine: AnimationEngine<MAX_STOPS>,
    pipeline: ColorPipeline,
    surface: Surface<B, CELLS>,
}

impl<B: LedBus, const CELLS: usize, const MAX_STOPS: usize>
    AnimationRenderer<B, CELLS, MAX_STOPS>
{
    pub fn new(
        engine: AnimationEngine<MAX_STOPS>,
        pipeline: ColorPipeline,
        surface: Surface<B, CELLS>,
    ) -> Self {
        Self {
            engine,
            pipeline,
            surface,
        }
    }

    /// Render the next animation frame and flush it.
    ///
    /// Returns the frames remaining in the current cycle, or `None` when no
    /// animation is selected (the surface is left untouched).
    pub fn render_tick(&mut self) -> Option<usize> {
        let (remaining, mask, color) = self.engine.get_frame_and_color()?;
        let on = self.pipeline.convert(color);
        self.surface.paint_mask(mask, on, BLACK);
        self.surface.show();
        Some(remaining)
    }

    pub fn engine(&self) -> &AnimationEngine<MAX_STOPS> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut AnimationEngine<MAX_STOPS> {
        &mut self.engine
    }

    pub fn pipeline_mut(&mut self) -> &mut ColorPipeline {
        &mut self.pipeline
    }

    pub fn surface(&self) -> &Surface<B, CELLS> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface<B, CELLS> {
        &mut self.surface
    }
}
