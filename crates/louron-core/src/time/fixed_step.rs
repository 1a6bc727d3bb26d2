/// Fixed-timestep accumulator.
///
/// Collects frame deltas and pays them out as whole fixed ticks, keeping the
/// sub-interval remainder for the next frame. The per-frame tick count is
/// bounded by `max_steps`; past that bound the backlog is shed and the
/// simulation runs late rather than spiraling (each late tick would make the
/// next frame longer, producing more ticks still).
#[derive(Debug)]
pub struct FixedStep {
    accumulator: f32,
    max_steps: u32,
    total_steps: u64,
}

impl FixedStep {
    /// Creates an accumulator that runs at most `max_steps` ticks per frame.
    pub fn new(max_steps: u32) -> Self {
        Self {
            accumulator: 0.0,
            max_steps,
            total_steps: 0,
        }
    }

    /// Feeds one frame's delta and returns the number of `interval`-sized
    /// ticks now due.
    ///
    /// Negative or NaN deltas contribute nothing; an `interval` that is not
    /// positive and finite yields no ticks.
    pub fn advance(&mut self, dt: f32, interval: f32) -> u32 {
        if !interval.is_finite() || interval <= 0.0 {
            return 0;
        }

        self.accumulator += dt.max(0.0);

        let due = (self.accumulator / interval) as u32;
        let steps = if due > self.max_steps {
            log::warn!(
                "fixed-step backlog of {due} ticks exceeds cap of {}; shedding",
                self.max_steps
            );
            self.accumulator = self.accumulator.rem_euclid(interval);
            self.max_steps
        } else {
            self.accumulator -= due as f32 * interval;
            due
        };

        self.total_steps += u64::from(steps);
        steps
    }

    /// Interpolation factor between the last two fixed states.
    ///
    /// In `[0, 1)` after an `advance` with the same `interval`; 0 when
    /// `interval` is not positive and finite.
    pub fn alpha(&self, interval: f32) -> f32 {
        if interval.is_finite() && interval > 0.0 {
            self.accumulator / interval
        } else {
            0.0
        }
    }

    /// Drops accumulated time. Call on scene changes or after long stalls
    /// whose backlog should not be simulated.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Lifetime count of ticks paid out.
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: f32 = 0.25;

    // ── advance ───────────────────────────────────────────────────────────

    #[test]
    fn below_one_interval_yields_no_ticks() {
        let mut step = FixedStep::new(8);
        assert_eq!(step.advance(0.1, INTERVAL), 0);
        assert_eq!(step.total_steps(), 0);
    }

    #[test]
    fn whole_intervals_yield_that_many_ticks() {
        let mut step = FixedStep::new(8);
        assert_eq!(step.advance(0.75, INTERVAL), 3);
        assert_eq!(step.total_steps(), 3);
    }

    #[test]
    fn remainder_is_retained_across_frames() {
        let mut step = FixedStep::new(8);
        assert_eq!(step.advance(0.2, INTERVAL), 0);
        // 0.2 + 0.2 = 0.4 -> one tick, 0.15 left over
        assert_eq!(step.advance(0.2, INTERVAL), 1);
        assert!((step.alpha(INTERVAL) - 0.6).abs() < 1e-5);
    }

    #[test]
    fn cap_bounds_ticks_and_sheds_backlog() {
        let mut step = FixedStep::new(4);
        assert_eq!(step.advance(10.0, INTERVAL), 4);
        // Backlog shed: the next small frame owes nothing extra.
        assert_eq!(step.advance(0.0, INTERVAL), 0);
        assert!(step.alpha(INTERVAL) < 1.0);
    }

    #[test]
    fn zero_or_negative_delta_yields_no_ticks() {
        let mut step = FixedStep::new(8);
        assert_eq!(step.advance(0.0, INTERVAL), 0);
        assert_eq!(step.advance(-1.0, INTERVAL), 0);
        assert_eq!(step.alpha(INTERVAL), 0.0);
    }

    #[test]
    fn non_positive_interval_yields_no_ticks() {
        let mut step = FixedStep::new(8);
        assert_eq!(step.advance(1.0, 0.0), 0);
        assert_eq!(step.advance(1.0, -0.5), 0);
        assert_eq!(step.advance(1.0, f32::NAN), 0);
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn identical_delta_sequences_produce_identical_ticks() {
        let deltas = [0.016, 0.033, 0.2, 0.016, 0.5, 0.008];
        let run = |deltas: &[f32]| {
            let mut step = FixedStep::new(8);
            deltas
                .iter()
                .map(|&dt| step.advance(dt, 1.0 / 60.0))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(&deltas), run(&deltas));
    }

    // ── alpha / reset ─────────────────────────────────────────────────────

    #[test]
    fn alpha_stays_below_one_after_advance() {
        let mut step = FixedStep::new(8);
        for dt in [0.01, 0.3, 0.26, 0.24, 0.999] {
            step.advance(dt, INTERVAL);
            let alpha = step.alpha(INTERVAL);
            assert!((0.0..1.0).contains(&alpha), "alpha {alpha} out of range");
        }
    }

    #[test]
    fn reset_drops_accumulated_time() {
        let mut step = FixedStep::new(8);
        step.advance(0.2, INTERVAL);
        step.reset();
        assert_eq!(step.alpha(INTERVAL), 0.0);
        assert_eq!(step.advance(0.2, INTERVAL), 0);
    }
}
