use std::time::Instant;

/// Frame timing snapshot produced by [`FrameClock::tick`].
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Scaled seconds elapsed since the previous tick
    /// (`unscaled_dt * time_scale`).
    pub dt: f32,

    /// Wall-clock seconds elapsed since the previous tick.
    pub unscaled_dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock sampled once per frame by the owning loop.
///
/// Exactly one instance exists per running engine: the runtime owns it and
/// lends `&FrameClock` to subsystems through the per-frame contexts. Besides
/// the raw delta, the clock maintains a time-scale multiplier for game time,
/// the configured fixed-tick interval, and a frames-per-second estimate
/// recomputed over a rolling 1-second window.
///
/// Accessors are plain reads of the values computed by the last tick; the
/// clock performs no locking and must only be touched from the loop thread.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    current_time: f64,
    delta: f64,
    time_scale: f32,
    fixed_delta: f32,
    frame_rate: u32,
    rate_timer: f32,
    rate_frames: u32,
    frame_index: u64,
}

impl FrameClock {
    /// Creates a clock baselined to the current instant.
    ///
    /// Defaults: `time_scale = 1.0`, `fixed_delta = 1/60`.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a clock baselined to `now` instead of the current instant.
    ///
    /// Pairs with [`tick_at`](Self::tick_at) to drive the clock from a
    /// fabricated or recorded timeline without sleeping.
    pub fn starting_at(now: Instant) -> Self {
        Self {
            last: now,
            current_time: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            fixed_delta: 1.0 / 60.0,
            frame_rate: 0,
            rate_timer: 1.0,
            rate_frames: 0,
            frame_index: 0,
        }
    }

    /// Advances the clock by sampling the monotonic clock now.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to an explicit timestamp and returns the snapshot.
    ///
    /// Must be called exactly once per frame. A `now` earlier than the
    /// previous sample yields a zero delta rather than negative time.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let delta = now.saturating_duration_since(self.last).as_secs_f64();
        self.last = now;
        self.delta = delta;
        self.current_time += delta;

        // Frame-rate bookkeeping over a rolling 1-second window. The timer
        // accumulates its remainder on reset so window drift does not
        // compound over long sessions.
        self.rate_timer -= delta as f32;
        self.rate_frames += 1;
        if self.rate_timer <= 0.0 {
            self.frame_rate = self.rate_frames;
            self.rate_frames = 0;
            self.rate_timer += 1.0;
        }

        let ft = FrameTime {
            dt: self.delta_time(),
            unscaled_dt: delta as f32,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Re-baselines the clock to the current instant so the next delta
    /// excludes a stall (suspension, debugger pause). Accumulated time and
    /// counters are untouched.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Seconds elapsed since the previous tick, unaffected by time scale.
    pub fn unscaled_delta_time(&self) -> f32 {
        self.delta as f32
    }

    /// Game-time seconds elapsed since the previous tick.
    pub fn delta_time(&self) -> f32 {
        self.delta as f32 * self.time_scale
    }

    /// Configured fixed-tick interval in seconds.
    pub fn unscaled_fixed_delta_time(&self) -> f32 {
        self.fixed_delta
    }

    /// Fixed-tick interval scaled by the current time scale.
    pub fn fixed_delta_time(&self) -> f32 {
        self.fixed_delta * self.time_scale
    }

    /// Sets the fixed-tick interval.
    ///
    /// Non-positive or non-finite values are rejected and the stored
    /// interval is kept; callers divide by this value.
    pub fn set_fixed_delta_time(&mut self, interval: f32) {
        if !interval.is_finite() || interval <= 0.0 {
            log::error!(
                "rejected fixed delta time {interval}; keeping {}",
                self.fixed_delta
            );
            return;
        }
        self.fixed_delta = interval;
    }

    /// Fixed updates per second implied by the configured interval.
    pub fn unscaled_fixed_updates_hz(&self) -> u32 {
        (1.0 / self.fixed_delta).round() as u32
    }

    /// Fixed updates per second under the current time scale.
    ///
    /// Returns 0 when the scaled interval is not positive (paused or
    /// reversed time) instead of dividing by zero.
    pub fn fixed_updates_hz(&self) -> u32 {
        let scaled = self.fixed_delta * self.time_scale;
        if scaled > 0.0 {
            (1.0 / scaled).round() as u32
        } else {
            0
        }
    }

    /// Current time-scale multiplier.
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Sets the time-scale multiplier. Not clamped: 0 pauses, values above
    /// 1 fast-forward. Negative values produce negative scaled deltas and
    /// no fixed ticks; downstream consumers are not reverse-time-safe.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale;
    }

    /// Frames-per-second estimate, recomputed once per second.
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Unscaled wall-clock seconds accumulated since construction.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Frames ticked since construction.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
