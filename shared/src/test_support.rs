use crate::config::SpinConfig;
use crate::shared_wheel_game::RandomSource;

/// Returns the same sample every time. `0.5` means no landing jitter.
#[derive(Debug, Clone)]
pub struct FixedSource(pub f64);

impl RandomSource for FixedSource {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// A power reading that, with no jitter, moves the wheel from `from` to
/// `target` in the fewest segments the config allows.
pub fn power_for(from: usize, target: usize, len: usize, config: &SpinConfig) -> f64 {
    let len = len as i64;
    let min_segments = (config.min_rotations * len as f64).floor() as i64;
    let segments = min_segments + (target as i64 - from as i64 - min_segments).rem_euclid(len);
    let rotations = (segments as f64 + 0.5) / len as f64;
    (rotations - config.min_rotations) / (config.max_rotations - config.min_rotations)
}
