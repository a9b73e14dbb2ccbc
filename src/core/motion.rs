//! Time-driven decorative animations. Pure functions of the time elapsed
//! since the owning screen was mounted, so a remount restarts them from the
//! same phase.

use std::f32::consts::TAU;
use std::time::Duration;

/// Cubic ease-out, clamped to `[0, 1]`.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// The "scroll down" hint at the bottom of the hero section. Waits,
/// fades in, then bobs down and back up forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldIndicator {
    pub delay: Duration,
    pub period: Duration,
    pub amplitude: f32,
}

impl Default for FoldIndicator {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            period: Duration::from_secs(2),
            amplitude: 10.0,
        }
    }
}

impl FoldIndicator {
    /// Phase within the current cycle in `[0, 1)`, or `None` before the delay.
    fn phase(&self, elapsed: Duration) -> Option<f32> {
        let running = elapsed.checked_sub(self.delay)?;
        if self.period.is_zero() {
            return Some(0.0);
        }
        let period = self.period.as_secs_f32();
        Some((running.as_secs_f32() % period) / period)
    }

    /// Vertical translation in pixels: 0 → amplitude → 0 over one period.
    pub fn offset(&self, elapsed: Duration) -> f32 {
        match self.phase(elapsed) {
            Some(phase) => {
                let triangle = 1.0 - (2.0 * phase - 1.0).abs();
                self.amplitude * smoothstep(triangle)
            }
            None => 0.0,
        }
    }

    /// Opacity, fading in over the first period after the delay.
    pub fn opacity(&self, elapsed: Duration) -> f32 {
        match elapsed.checked_sub(self.delay) {
            Some(_) if self.period.is_zero() => 1.0,
            Some(running) => (running.as_secs_f32() / self.period.as_secs_f32()).min(1.0),
            None => 0.0,
        }
    }
}

/// The glowing dot circling the profile photo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub revolution: Duration,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            revolution: Duration::from_secs(20),
        }
    }
}

impl Orbit {
    /// Angle in radians, linear, starting at the top of the circle.
    pub fn angle(&self, elapsed: Duration) -> f32 {
        if self.revolution.is_zero() {
            return 0.0;
        }
        let revolution = self.revolution.as_secs_f32();
        (elapsed.as_secs_f32() % revolution) / revolution * TAU
    }
}

fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Eased entrance progress of an element that starts animating `delay`
/// after mount and settles after `duration`.
pub fn entrance(elapsed: Duration, delay: Duration, duration: Duration) -> f32 {
    match elapsed.checked_sub(delay) {
        None => 0.0,
        Some(_) if duration.is_zero() => 1.0,
        Some(running) => ease_out(running.as_secs_f32() / duration.as_secs_f32()),
    }
}
