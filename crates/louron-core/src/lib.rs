//! Louron engine core.
//!
//! This crate owns the frame-timing subsystem and the headless runtime loop
//! that drives it. Higher layers (sandbox scenes, tools) implement
//! [`core::App`] and read time through the contexts handed to its callbacks.

pub mod core;
pub mod runtime;
pub mod time;

pub mod logging;
