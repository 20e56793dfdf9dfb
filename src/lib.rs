#![no_std]

pub mod animation;
pub mod clock_face;
pub mod config;
pub mod gamma;
pub mod offload;
pub mod pipeline;
pub mod render;
pub mod scheduler;
pub mod surface;

pub use animation::{
    AnimationDefinition, AnimationEngine, AnimationError, AnimationId, FrameMask,
};
pub use gamma::ws2812_lut;
pub use offload::{OffloadQueue, OffloadReceiver, OffloadSender};
pub use pipeline::ColorPipeline;
pub use render::AnimationRenderer;
pub use scheduler::{BASE_TICK, Scheduler, WorkError, WorkFn};
pub use surface::{OutOfRange, Surface};

pub use embassy_time::Duration;

/// RGB color triple used throughout the crate.
pub type Rgb = smart_leds::RGB8;

/// Abstract LED bus trait
///
/// Implement this trait to support different hardware platforms.
/// The surface is generic over this trait.
pub trait LedBus {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
