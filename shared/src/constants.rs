pub const WHEEL_VALUES: [u32; 20] = [
    15, 80, 35, 60, 20, 40, 75, 55, 95, 50, 85, 30, 65, 10, 45, 70, 25, 90, 5, 100,
];

pub const TARGET_SCORE: u32 = 100;
pub const MAX_SPINS: u32 = 2;

pub const MIN_ROTATIONS: f64 = 1.5;
pub const MAX_ROTATIONS: f64 = 3.5;
pub const MIN_VALID_ROTATIONS: f64 = 1.0;
pub const JITTER_SEGMENTS: u32 = 2;

// Upper bounds accepted from a config override
pub const ROTATIONS_LIMIT: f64 = 1000.0;
pub const JITTER_SEGMENTS_LIMIT: u32 = 1000;

pub const SPIN_BASE_DURATION_MS: f64 = 3000.0;
pub const SPIN_POWER_DURATION_MS: f64 = 2000.0;

pub const RESULT_REVEAL_DELAY_MS: u32 = 500;
pub const SLOW_SPIN_REVEAL_DELAY_MS: u32 = 1000;

pub const BUST_MESSAGE: &str = "You went over!";
pub const EXACT_WIN_MESSAGE: &str = "One dollar!";

pub fn final_score_message(total: u32) -> String {
    format!("You got {}", total)
}
