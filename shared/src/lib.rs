pub mod config;
pub mod constants;
pub mod error;
pub mod shared_luck_game;
pub mod shared_wheel_game;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{GameConfig, SpinConfig};
pub use error::{GameError, Result};
pub use shared_luck_game::{
    ActionOptions, Deferred, FeedbackKind, GameOutcome, GameSession, GameSignal, Phase, Transition,
};
pub use shared_wheel_game::{SpinAnimation, SpinOutcome, Wheel};
