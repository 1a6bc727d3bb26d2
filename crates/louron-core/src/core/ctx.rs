use crate::runtime::RuntimeCtx;
use crate::time::{FrameClock, FrameTime};

/// Per-fixed-tick context passed to `core::App::on_fixed_update`.
pub struct TickCtx<'a> {
    /// The engine clock, lent for reads.
    pub clock: &'a FrameClock,

    /// Game-time seconds this tick advances the simulation by: the
    /// configured fixed interval, independent of render frame rate.
    pub dt: f32,

    /// Lifetime index of this tick.
    pub tick_index: u64,
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    /// The engine clock, lent for reads.
    pub clock: &'a FrameClock,

    /// Timing snapshot taken at the top of this frame.
    pub time: FrameTime,

    /// Fixed ticks that ran earlier in this frame.
    pub fixed_steps: u32,

    /// Interpolation factor between the last two fixed states, in `[0, 1)`.
    /// Use it to blend rendered state between simulation ticks.
    pub alpha: f32,

    /// Command sink for runtime requests (exit, time-scale changes).
    pub runtime: &'a mut RuntimeCtx,
}
