//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime loop and
//! higher layers (sandbox, tools). It avoids leaking runtime internals into
//! user code and provides consistent per-frame and per-tick contexts.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, TickCtx};
