use crate::constants::time::{DAY_LENGTH_FRAMES, MAX_NIGHT_ALPHA};
use std::f32::consts::TAU;

/// Night overlay color, without alpha
const NIGHT_TINT: [u8; 3] = [10, 10, 40];

/// Frame-driven ambient tint for the renderer.
///
/// Frame 0 is midday (no tint); half a day later the overlay reaches its
/// darkest, then fades back.
#[derive(Debug, Clone, Copy)]
pub struct DayNightCycle {
    day_length: u64,
    max_alpha: f32,
}

impl DayNightCycle {
    pub fn new(day_length: u64, max_alpha: f32) -> Self {
        Self {
            day_length: day_length.max(1),
            max_alpha: max_alpha.clamp(0.0, 1.0),
        }
    }

    /// Position within the current day in [0, 1)
    pub fn phase(&self, frame: u64) -> f32 {
        (frame % self.day_length) as f32 / self.day_length as f32
    }

    /// Overlay alpha in [0, max_alpha]
    pub fn tint_alpha(&self, frame: u64) -> f32 {
        let darkness = (1.0 - (self.phase(frame) * TAU).cos()) * 0.5;
        darkness * self.max_alpha
    }

    pub fn is_night(&self, frame: u64) -> bool {
        self.tint_alpha(frame) > self.max_alpha * 0.5
    }

    /// RGBA overlay for the frame
    pub fn tint_color(&self, frame: u64) -> [u8; 4] {
        let alpha = (self.tint_alpha(frame) * 255.0).round() as u8;
        [NIGHT_TINT[0], NIGHT_TINT[1], NIGHT_TINT[2], alpha]
    }
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self::new(DAY_LENGTH_FRAMES, MAX_NIGHT_ALPHA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midday_and_midnight() {
        let cycle = DayNightCycle::new(100, 0.6);
        assert!(cycle.tint_alpha(0).abs() < 1e-6);
        assert!((cycle.tint_alpha(50) - 0.6).abs() < 1e-6);
        assert!(!cycle.is_night(0));
        assert!(cycle.is_night(50));
        assert_eq!(cycle.tint_color(0)[3], 0);
    }

    #[test]
    fn test_cycle_repeats() {
        let cycle = DayNightCycle::new(100, 0.6);
        for frame in 0..100 {
            assert!((cycle.tint_alpha(frame) - cycle.tint_alpha(frame + 300)).abs() < 1e-6);
            let alpha = cycle.tint_alpha(frame);
            assert!((0.0..=0.6 + 1e-6).contains(&alpha));
        }
    }
}
