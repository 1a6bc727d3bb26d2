use super::ctx::{FrameCtx, TickCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once per due fixed tick, before `on_frame`. Zero or more
    /// invocations per frame depending on the accumulated backlog.
    fn on_fixed_update(&mut self, ctx: &mut TickCtx<'_>) {
        let _ = ctx;
    }

    /// Called once per frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}

impl<A: App + ?Sized> App for &mut A {
    fn on_fixed_update(&mut self, ctx: &mut TickCtx<'_>) {
        (**self).on_fixed_update(ctx);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        (**self).on_frame(ctx)
    }
}
