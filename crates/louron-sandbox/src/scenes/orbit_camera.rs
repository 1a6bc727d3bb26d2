use std::f32::consts::TAU;

use glam::Vec3;
use louron_core::core::FrameCtx;

use super::Scene;

const ANGULAR_VELOCITY: f32 = TAU / 2.0; // one revolution per 2 scaled seconds
const RADIUS: f32 = 8.0;
const HEIGHT: f32 = 3.0;

const SLOW_MOTION_AT: f32 = 1.5; // unscaled seconds
const RECOVER_AT: f32 = 3.0;
const SLOW_MOTION_SCALE: f32 = 0.25;

#[derive(Debug, PartialEq)]
enum Script {
    Normal,
    SlowMotion,
    Recovered,
}

/// Camera controller integrating orbital motion from per-frame delta time,
/// with a scripted slow-motion segment exercising the time-scale path.
pub struct OrbitCamera {
    duration: f32,
    target: Vec3,
    angle: f32,
    position: Vec3,
    elapsed: f32,
    script: Script,
    slow_motion_frames: u32,
}

impl OrbitCamera {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            target: Vec3::ZERO,
            angle: 0.0,
            position: Vec3::new(RADIUS, HEIGHT, 0.0),
            elapsed: 0.0,
            script: Script::Normal,
            slow_motion_frames: 0,
        }
    }
}

impl Scene for OrbitCamera {
    fn name(&self) -> &'static str {
        "orbit camera"
    }

    fn duration(&self) -> f32 {
        self.duration
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) {
        self.elapsed += ctx.time.unscaled_dt;

        self.angle += ANGULAR_VELOCITY * ctx.time.dt;
        self.position =
            self.target + Vec3::new(RADIUS * self.angle.cos(), HEIGHT, RADIUS * self.angle.sin());

        if ctx.clock.time_scale() == SLOW_MOTION_SCALE {
            self.slow_motion_frames += 1;
        }

        // The script runs on unscaled time; it must fire even in slow motion.
        match self.script {
            Script::Normal if self.elapsed >= SLOW_MOTION_AT => {
                log::debug!("orbit camera: entering slow motion");
                ctx.runtime.set_time_scale(SLOW_MOTION_SCALE);
                self.script = Script::SlowMotion;
            }
            Script::SlowMotion if self.elapsed >= RECOVER_AT => {
                log::debug!("orbit camera: back to full speed");
                ctx.runtime.set_time_scale(1.0);
                self.script = Script::Recovered;
            }
            _ => {}
        }
    }

    fn summary(&self) -> String {
        format!(
            "{:.2} revolutions, {} slow-motion frames, final position {:.1?}",
            self.angle / TAU,
            self.slow_motion_frames,
            self.position
        )
    }
}
