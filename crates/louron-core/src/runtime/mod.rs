//! Headless runtime loop.
//!
//! Owns the engine's `FrameClock` and `FixedStep` and wires them to the
//! application contract in `core`.

mod driver;

pub use driver::{Runtime, RuntimeConfig, RuntimeCtx};
