use glam::Vec3;
use louron_core::core::{FrameCtx, TickCtx};

use super::Scene;

const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);
const LAUNCH_SPEED: f32 = 25.0;
const PROJECTILES: usize = 12;

const PAUSE_AT: f32 = 1.0; // unscaled seconds
const RESUME_AT: f32 = 2.0;

struct Projectile {
    position: Vec3,
    velocity: Vec3,
    landed: bool,
}

/// Projectiles integrated only in fixed updates, so trajectories are
/// identical regardless of render frame rate. A scripted pause shows that a
/// zero time scale produces no fixed ticks at all.
pub struct Ballistics {
    duration: f32,
    projectiles: Vec<Projectile>,
    impacts: u32,
    ticks: u64,
    ticks_while_paused: u64,
    elapsed: f32,
    paused: bool,
    resumed: bool,
}

impl Ballistics {
    pub fn new(duration: f32) -> Self {
        // A fan of launch angles between 20 and 70 degrees.
        let projectiles = (0..PROJECTILES)
            .map(|i| {
                let angle = (20.0 + 50.0 * i as f32 / (PROJECTILES - 1) as f32).to_radians();
                Projectile {
                    position: Vec3::ZERO,
                    velocity: Vec3::new(angle.cos(), angle.sin(), 0.0) * LAUNCH_SPEED,
                    landed: false,
                }
            })
            .collect();
        Self {
            duration,
            projectiles,
            impacts: 0,
            ticks: 0,
            ticks_while_paused: 0,
            elapsed: 0.0,
            paused: false,
            resumed: false,
        }
    }
}

impl Scene for Ballistics {
    fn name(&self) -> &'static str {
        "ballistics"
    }

    fn duration(&self) -> f32 {
        self.duration
    }

    fn on_fixed_update(&mut self, ctx: &mut TickCtx<'_>) {
        self.ticks += 1;
        if ctx.clock.time_scale() == 0.0 {
            // Should never happen: the accumulator sees zero scaled delta.
            self.ticks_while_paused += 1;
        }

        for p in self.projectiles.iter_mut().filter(|p| !p.landed) {
            p.velocity += GRAVITY * ctx.dt;
            p.position += p.velocity * ctx.dt;
            if p.position.y <= 0.0 && p.velocity.y < 0.0 {
                p.landed = true;
                self.impacts += 1;
            }
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) {
        self.elapsed += ctx.time.unscaled_dt;

        if !self.paused && self.elapsed >= PAUSE_AT {
            log::debug!("ballistics: pausing simulation");
            ctx.runtime.set_time_scale(0.0);
            self.paused = true;
        }
        if self.paused && !self.resumed && self.elapsed >= RESUME_AT {
            log::debug!("ballistics: resuming simulation");
            ctx.runtime.set_time_scale(1.0);
            self.resumed = true;
        }
    }

    fn summary(&self) -> String {
        format!(
            "{} of {} impacts, {} fixed ticks, {} ticks while paused",
            self.impacts,
            self.projectiles.len(),
            self.ticks,
            self.ticks_while_paused
        )
    }
}
