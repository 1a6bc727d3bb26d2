//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per running engine, owned by the runtime loop
//! - call `tick()` once per frame to obtain `FrameTime`
//! - feed frame deltas to a `FixedStep` to schedule deterministic logic ticks

mod fixed_step;
mod frame_clock;

pub use fixed_step::FixedStep;
pub use frame_clock::{FrameClock, FrameTime};
