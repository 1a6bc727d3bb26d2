use std::f32::consts::TAU;

use glam::Vec3;
use louron_core::core::FrameCtx;

use super::Scene;

const GRID: usize = 10;
const WAVE_SPEED: f32 = 2.0; // radians per scaled second
const WAVE_LENGTH: f32 = 4.0; // grid cells per full cycle
const AMPLITUDE: f32 = 1.5;

/// Grid of cubes whose heights follow a travelling sine wave advanced by
/// scaled delta time. Slowing the clock slows the wave; pausing freezes it.
pub struct CubeWave {
    duration: f32,
    phase: f32,
    cubes: Vec<Vec3>,
    peak: f32,
}

impl CubeWave {
    pub fn new(duration: f32) -> Self {
        let mut cubes = Vec::with_capacity(GRID * GRID);
        for z in 0..GRID {
            for x in 0..GRID {
                cubes.push(Vec3::new(x as f32, 0.0, z as f32));
            }
        }
        Self {
            duration,
            phase: 0.0,
            cubes,
            peak: 0.0,
        }
    }
}

impl Scene for CubeWave {
    fn name(&self) -> &'static str {
        "cube wave"
    }

    fn duration(&self) -> f32 {
        self.duration
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) {
        self.phase += WAVE_SPEED * ctx.time.dt;
        for cube in &mut self.cubes {
            cube.y = AMPLITUDE * ((cube.x + cube.z) / WAVE_LENGTH * TAU + self.phase).sin();
            self.peak = self.peak.max(cube.y);
        }
    }

    fn summary(&self) -> String {
        format!(
            "{} cubes, {:.1} wave cycles, peak height {:.2}",
            self.cubes.len(),
            (self.phase / TAU).max(0.0),
            self.peak
        )
    }
}
