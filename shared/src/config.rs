use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{GameError, Result};

/// Tunables for turning a power reading into wheel travel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpinConfig {
    pub min_rotations: f64,
    pub max_rotations: f64,
    /// A spin shorter than this many rotations is a slow spin.
    pub min_valid_rotations: f64,
    /// Landing jitter in segments, applied as `-jitter..=jitter`.
    pub jitter_segments: u32,
    pub base_duration_ms: f64,
    pub power_duration_ms: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_rotations: MIN_ROTATIONS,
            max_rotations: MAX_ROTATIONS,
            min_valid_rotations: MIN_VALID_ROTATIONS,
            jitter_segments: JITTER_SEGMENTS,
            base_duration_ms: SPIN_BASE_DURATION_MS,
            power_duration_ms: SPIN_POWER_DURATION_MS,
        }
    }
}

impl SpinConfig {
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.min_rotations,
            self.max_rotations,
            self.min_valid_rotations,
            self.base_duration_ms,
            self.power_duration_ms,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(GameError::InvalidConfig("spin values must be finite".to_string()));
        }
        if self.min_rotations < 0.0 || self.max_rotations < self.min_rotations {
            return Err(GameError::InvalidConfig(format!(
                "rotation range {}..{} is inverted or negative",
                self.min_rotations, self.max_rotations
            )));
        }
        if self.max_rotations > ROTATIONS_LIMIT {
            return Err(GameError::InvalidConfig(format!(
                "max_rotations {} is above {}",
                self.max_rotations, ROTATIONS_LIMIT
            )));
        }
        if self.jitter_segments > JITTER_SEGMENTS_LIMIT {
            return Err(GameError::InvalidConfig(format!(
                "jitter_segments {} is above {}",
                self.jitter_segments, JITTER_SEGMENTS_LIMIT
            )));
        }
        if self.base_duration_ms < 0.0 || self.power_duration_ms < 0.0 {
            return Err(GameError::InvalidConfig("animation durations must not be negative".to_string()));
        }
        Ok(())
    }
}

/// Everything a session needs to know before the first spin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub wheel_values: Vec<u32>,
    pub target_score: u32,
    pub max_spins: u32,
    pub result_reveal_delay_ms: u32,
    pub slow_spin_reveal_delay_ms: u32,
    pub spin: SpinConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wheel_values: WHEEL_VALUES.to_vec(),
            target_score: TARGET_SCORE,
            max_spins: MAX_SPINS,
            result_reveal_delay_ms: RESULT_REVEAL_DELAY_MS,
            slow_spin_reveal_delay_ms: SLOW_SPIN_REVEAL_DELAY_MS,
            spin: SpinConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.wheel_values.is_empty() {
            return Err(GameError::EmptyWheel);
        }
        if self.max_spins == 0 {
            return Err(GameError::InvalidConfig("max_spins must be at least 1".to_string()));
        }
        // Every spin may land on the top value; the running total must fit a u32.
        let top = self.wheel_values.iter().copied().max().unwrap_or(0);
        if top.checked_mul(self.max_spins).is_none() {
            return Err(GameError::InvalidConfig(format!(
                "{} spins of up to {} points overflow the score",
                self.max_spins, top
            )));
        }
        self.spin.validate()
    }
}
