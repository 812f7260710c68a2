use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::config::SpinConfig;
use crate::constants::WHEEL_VALUES;
use crate::error::{GameError, Result};

/// The ring of point values the player spins through.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Wheel {
    values: Vec<u32>,
}

impl Wheel {
    pub fn new(values: Vec<u32>) -> Result<Self> {
        if values.is_empty() {
            return Err(GameError::EmptyWheel);
        }
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Point value of the segment at `index`, wrapping past the end.
    pub fn value_at(&self, index: usize) -> u32 {
        self.values[index % self.values.len()]
    }

    /// Maps any signed segment offset onto `0..len`.
    pub fn wrap(&self, offset: i64) -> usize {
        wrap_index(offset, self.values.len())
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self {
            values: WHEEL_VALUES.to_vec(),
        }
    }
}

pub fn wrap_index(offset: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    offset.rem_euclid(len as i64) as usize
}

/// Uniform samples in `[0, 1)` for landing jitter.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Result of a single spin, consumed by the session right after it is made.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinOutcome {
    pub landing_position: usize,
    pub rotations: f64,
    pub valid: bool,
    /// Signed distance the wheel travels, jitter included.
    pub segments_travelled: i64,
}

/// Clamps a raw power reading into `[0, 1]`. NaN reads as no power.
pub fn clamp_power(power: f64) -> f64 {
    if power.is_nan() {
        0.0
    } else {
        power.clamp(0.0, 1.0)
    }
}

/// Normalizes an indicator sample taken between `min_pos` and `max_pos`.
/// A degenerate range reads as no power.
pub fn normalize_power(indicator_pos: f64, min_pos: f64, max_pos: f64) -> f64 {
    let width = max_pos - min_pos;
    if !width.is_finite() || width <= 0.0 {
        return 0.0;
    }
    clamp_power((indicator_pos - min_pos) / width)
}

pub fn rotations_for(power: f64, config: &SpinConfig) -> f64 {
    config.min_rotations + clamp_power(power) * (config.max_rotations - config.min_rotations)
}

pub fn resolve<R: RandomSource + ?Sized>(
    power: f64,
    wheel: &Wheel,
    start_position: usize,
    rng: &mut R,
    config: &SpinConfig,
) -> SpinOutcome {
    let rotations = rotations_for(power, config);
    let segments_to_spin = (rotations * wheel.len() as f64).floor() as i64;

    let jitter = config.jitter_segments as i64;
    let span = jitter * 2 + 1;
    let sample = clamp_power(rng.next_unit());
    let random_offset = ((sample * span as f64).floor() as i64).min(span - 1) - jitter;

    // Saturate so an unchecked SpinConfig still lands somewhere on the wheel.
    let segments_travelled = segments_to_spin.saturating_add(random_offset);
    let landing_position = wheel.wrap((start_position as i64).saturating_add(segments_travelled));

    SpinOutcome {
        landing_position,
        rotations,
        valid: rotations >= config.min_valid_rotations,
        segments_travelled,
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

pub fn spin_duration_ms(power: f64, config: &SpinConfig) -> f64 {
    config.base_duration_ms + clamp_power(power) * config.power_duration_ms
}

/// Pure description of a spin animation. Renderers sample it by progress and
/// never feed pixel geometry back into the game.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    pub start_position: usize,
    pub segments: i64,
    pub duration_ms: f64,
    pub wheel_len: usize,
}

impl SpinAnimation {
    pub fn new(start_position: usize, outcome: &SpinOutcome, wheel_len: usize, duration_ms: f64) -> Self {
        Self {
            start_position,
            segments: outcome.segments_travelled,
            duration_ms,
            wheel_len,
        }
    }

    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Continuous, unwrapped segment offset at `progress`.
    pub fn offset(&self, progress: f64) -> f64 {
        let eased = ease_out_cubic(progress.clamp(0.0, 1.0));
        self.start_position as f64 + self.segments as f64 * eased
    }

    /// Segment index under the pointer at `progress`.
    pub fn position(&self, progress: f64) -> usize {
        wrap_index(self.offset(progress).floor() as i64, self.wheel_len)
    }

    /// Number of segment boundaries crossed between two progress points.
    pub fn ticks_between(&self, from: f64, to: f64) -> u32 {
        let a = self.offset(from).floor() as i64;
        let b = self.offset(to).floor() as i64;
        (b - a).unsigned_abs() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::test_support::FixedSource;

    #[test]
    fn test_zero_power_is_still_valid() {
        let config = SpinConfig::default();
        let outcome = resolve(0.0, &Wheel::default(), 0, &mut FixedSource(0.5), &config);
        assert_eq!(outcome.rotations, 1.5);
        assert!(outcome.valid);
        assert_eq!(outcome.segments_travelled, 30);
        assert_eq!(outcome.landing_position, 10);
    }

    #[test]
    fn test_full_power_travel() {
        let config = SpinConfig::default();
        let outcome = resolve(1.0, &Wheel::default(), 3, &mut FixedSource(0.5), &config);
        assert_eq!(outcome.rotations, 3.5);
        assert_eq!(outcome.segments_travelled, 70);
        assert_eq!(outcome.landing_position, 13);
    }

    #[test]
    fn test_jitter_covers_minus_two_to_plus_two() {
        let config = SpinConfig::default();
        let wheel = Wheel::default();
        let offsets: Vec<i64> = [0.0, 0.3, 0.5, 0.7, 0.9, 1.0]
            .iter()
            .map(|&u| resolve(0.0, &wheel, 0, &mut FixedSource(u), &config).segments_travelled - 30)
            .collect();
        assert_eq!(offsets, vec![-2, -1, 0, 1, 2, 2]);
    }

    #[test]
    fn test_out_of_range_power_is_clamped() {
        let config = SpinConfig::default();
        let wheel = Wheel::default();
        let high = resolve(7.0, &wheel, 0, &mut FixedSource(0.5), &config);
        let low = resolve(-3.0, &wheel, 0, &mut FixedSource(0.5), &config);
        let nan = resolve(f64::NAN, &wheel, 0, &mut FixedSource(0.5), &config);
        assert_eq!(high.rotations, 3.5);
        assert_eq!(low.rotations, 1.5);
        assert_eq!(nan.rotations, 1.5);
    }

    #[test]
    fn test_slow_spin_detected_when_retuned() {
        let config = SpinConfig {
            min_rotations: 0.25,
            max_rotations: 0.75,
            ..SpinConfig::default()
        };
        let outcome = resolve(1.0, &Wheel::default(), 0, &mut FixedSource(0.5), &config);
        assert!(!outcome.valid);
        assert_eq!(outcome.segments_travelled, 15);
    }

    #[test]
    fn test_huge_rotation_count_still_lands() {
        let config = SpinConfig {
            max_rotations: 1e300,
            ..SpinConfig::default()
        };
        let wheel = Wheel::default();
        for sample in [0.0, 0.5, 1.0] {
            let outcome = resolve(1.0, &wheel, 19, &mut FixedSource(sample), &config);
            assert!(outcome.landing_position < wheel.len());
            assert!(outcome.valid);
        }
    }

    #[test]
    fn test_normalize_power() {
        assert_eq!(normalize_power(50.0, 0.0, 100.0), 0.5);
        assert_eq!(normalize_power(150.0, 0.0, 100.0), 1.0);
        assert_eq!(normalize_power(-10.0, 0.0, 100.0), 0.0);
        assert_eq!(normalize_power(42.0, 10.0, 10.0), 0.0);
        assert_eq!(normalize_power(42.0, 20.0, 10.0), 0.0);
        assert_eq!(normalize_power(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_wheel_rejects_empty() {
        assert_eq!(Wheel::new(Vec::new()), Err(GameError::EmptyWheel));
        let wheel = Wheel::new(vec![5, 10, 15]).unwrap();
        assert_eq!(wheel.wrap(-1), 2);
        assert_eq!(wheel.wrap(7), 1);
        assert_eq!(wheel.value_at(4), 10);
    }

    #[test]
    fn test_animation_ends_on_landing() {
        let config = SpinConfig::default();
        let wheel = Wheel::default();
        let outcome = resolve(0.37, &wheel, 6, &mut FixedSource(0.8), &config);
        let animation = SpinAnimation::new(6, &outcome, wheel.len(), spin_duration_ms(0.37, &config));
        assert_eq!(animation.position(0.0), 6);
        assert_eq!(animation.position(1.0), outcome.landing_position);
        assert_eq!(animation.progress_at(animation.duration_ms * 2.0), 1.0);
        assert_eq!(animation.ticks_between(0.0, 1.0) as i64, outcome.segments_travelled);
    }

    #[test]
    fn test_animation_duration_scales_with_power() {
        let config = SpinConfig::default();
        assert_eq!(spin_duration_ms(0.0, &config), 3000.0);
        assert_eq!(spin_duration_ms(0.5, &config), 4000.0);
        assert_eq!(spin_duration_ms(1.0, &config), 5000.0);
    }

    proptest! {
        #[test]
        fn prop_default_rotations_in_range(power in 0.0f64..=1.0, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = resolve(power, &Wheel::default(), 0, &mut rng, &SpinConfig::default());
            prop_assert!(outcome.rotations >= 1.5 && outcome.rotations <= 3.5);
            prop_assert!(outcome.valid);
        }

        #[test]
        fn prop_landing_always_in_bounds(
            len in 1usize..64,
            start in 0usize..1000,
            power in -2.0f64..3.0,
            sample in 0.0f64..1.0,
        ) {
            let wheel = Wheel::new((0..len as u32).collect()).unwrap();
            let outcome = resolve(power, &wheel, start, &mut FixedSource(sample), &SpinConfig::default());
            prop_assert!(outcome.landing_position < len);
        }

        #[test]
        fn prop_wrap_in_bounds(len in 1usize..64, offset in any::<i32>()) {
            prop_assert!(wrap_index(offset as i64, len) < len);
        }
    }
}
