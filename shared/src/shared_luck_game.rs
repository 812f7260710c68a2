use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::constants::{final_score_message, BUST_MESSAGE, EXACT_WIN_MESSAGE};
use crate::error::{GameError, Result};
use crate::shared_wheel_game::*;

/// Where the session is in a single game.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingStart,
    Charging,
    Spinning,
    ChoosingAction,
    GameOver,
}

/// Sound cues the presentation layer should play.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Beep,
    Ding,
    TripleDing,
    Buzzer,
    Boo,
}

/// How a finished game ended.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Bust,
    ExactWin,
    ForcedStop,
    Stayed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionOptions {
    pub show_stay: bool,
    pub show_spin_again: bool,
}

impl ActionOptions {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn both() -> Self {
        Self {
            show_stay: true,
            show_spin_again: true,
        }
    }

    pub fn spin_again_only() -> Self {
        Self {
            show_stay: false,
            show_spin_again: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum GameSignal {
    PhaseChanged(Phase),
    ScoreChanged(u32),
    SpinOutcome {
        landing_position: usize,
        valid: bool,
        animation: SpinAnimation,
    },
    Feedback(FeedbackKind),
    Message(String),
    Options(ActionOptions),
}

/// Signals that should be shown after a pause. Apply them only while
/// [`GameSession::is_current`] still holds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Deferred {
    pub delay_ms: u32,
    pub epoch: u64,
    pub phase: Phase,
    pub signals: Vec<GameSignal>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Transition {
    pub signals: Vec<GameSignal>,
    pub deferred: Option<Deferred>,
}

impl Transition {
    fn ignored() -> Self {
        Self::default()
    }
}

/// One player's run at the wheel: up to two scoring spins, then game over.
#[derive(Debug, Clone)]
pub struct GameSession<R = ThreadRng> {
    config: GameConfig,
    wheel: Wheel,
    rng: R,
    phase: Phase,
    spin_count: u32,
    total_score: u32,
    position: usize,
    power_level: f64,
    pending: Option<SpinOutcome>,
    options: ActionOptions,
    outcome: Option<GameOutcome>,
    epoch: u64,
}

impl GameSession<ThreadRng> {
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: RandomSource> GameSession<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let wheel = Wheel::new(config.wheel_values.clone())?;
        Ok(Self {
            config,
            wheel,
            rng,
            phase: Phase::AwaitingStart,
            spin_count: 0,
            total_score: 0,
            position: 0,
            power_level: 0.0,
            pending: None,
            options: ActionOptions::hidden(),
            outcome: None,
            epoch: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn spin_count(&self) -> u32 {
        self.spin_count
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn power_level(&self) -> f64 {
        self.power_level
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn options(&self) -> ActionOptions {
        self.options
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn value_at(&self, position: usize) -> u32 {
        self.wheel.value_at(position)
    }

    pub fn current_value(&self) -> u32 {
        self.wheel.value_at(self.position)
    }

    /// Whether a deferred batch still belongs to the game on screen.
    pub fn is_current(&self, deferred: &Deferred) -> bool {
        deferred.epoch == self.epoch && deferred.phase == self.phase
    }

    /// Tap, click or key press. Starts charging, or releases the gauge and
    /// spins. `sample_power` is only read on release. Ignored in every other
    /// phase, which keeps a second tap from starting a second spin.
    pub fn activate<F: FnOnce() -> f64>(&mut self, sample_power: F) -> Transition {
        match self.phase {
            Phase::AwaitingStart => {
                self.set_phase(Phase::Charging);
                Transition {
                    signals: vec![GameSignal::PhaseChanged(Phase::Charging)],
                    deferred: None,
                }
            }
            Phase::Charging => self.release(sample_power()),
            phase => {
                log::debug!("activate ignored while {:?}", phase);
                Transition::ignored()
            }
        }
    }

    fn release(&mut self, raw_power: f64) -> Transition {
        let power = clamp_power(raw_power);
        self.power_level = power;

        let outcome = resolve(power, &self.wheel, self.position, &mut self.rng, &self.config.spin);
        let animation = SpinAnimation::new(
            self.position,
            &outcome,
            self.wheel.len(),
            spin_duration_ms(power, &self.config.spin),
        );
        log::debug!(
            "spin power {:.3}: {:.2} rotations, {} segments, landing on {}",
            power,
            outcome.rotations,
            outcome.segments_travelled,
            outcome.landing_position
        );

        self.pending = Some(outcome);
        self.set_phase(Phase::Spinning);
        Transition {
            signals: vec![
                GameSignal::PhaseChanged(Phase::Spinning),
                GameSignal::SpinOutcome {
                    landing_position: outcome.landing_position,
                    valid: outcome.valid,
                    animation,
                },
            ],
            deferred: None,
        }
    }

    /// The presentation layer reports that the spin animation is done.
    pub fn spin_finished(&mut self) -> Result<Transition> {
        let outcome = match (self.phase, self.pending) {
            (Phase::Spinning, Some(outcome)) => outcome,
            _ => return Err(self.reject("finish a spin")),
        };
        self.pending = None;
        self.position = outcome.landing_position;

        if !outcome.valid {
            log::info!("slow spin: {:.2} rotations", outcome.rotations);
            self.options = ActionOptions::spin_again_only();
            self.set_phase(Phase::ChoosingAction);
            return Ok(Transition {
                signals: vec![
                    GameSignal::PhaseChanged(Phase::ChoosingAction),
                    GameSignal::Feedback(FeedbackKind::Boo),
                ],
                deferred: Some(self.defer(
                    self.config.slow_spin_reveal_delay_ms,
                    vec![GameSignal::Options(self.options)],
                )),
            });
        }

        let value = self.wheel.value_at(outcome.landing_position);
        self.total_score += value;
        self.spin_count += 1;
        log::debug!(
            "landed on {} (value {}), total {} after {} spins",
            outcome.landing_position,
            value,
            self.total_score,
            self.spin_count
        );

        let target = self.config.target_score;
        let ending = if self.total_score > target {
            Some((GameOutcome::Bust, FeedbackKind::Buzzer, BUST_MESSAGE.to_string()))
        } else if self.total_score == target {
            Some((GameOutcome::ExactWin, FeedbackKind::TripleDing, EXACT_WIN_MESSAGE.to_string()))
        } else if self.spin_count >= self.config.max_spins {
            Some((GameOutcome::ForcedStop, FeedbackKind::Ding, final_score_message(self.total_score)))
        } else {
            None
        };

        let mut signals = vec![GameSignal::ScoreChanged(self.total_score)];
        let reveal = match ending {
            Some((game_outcome, feedback, message)) => {
                self.finish(game_outcome);
                signals.push(GameSignal::PhaseChanged(Phase::GameOver));
                vec![GameSignal::Feedback(feedback), GameSignal::Message(message)]
            }
            None => {
                self.options = ActionOptions::both();
                self.set_phase(Phase::ChoosingAction);
                signals.push(GameSignal::PhaseChanged(Phase::ChoosingAction));
                vec![GameSignal::Options(self.options)]
            }
        };

        Ok(Transition {
            signals,
            deferred: Some(self.defer(self.config.result_reveal_delay_ms, reveal)),
        })
    }

    pub fn choose_stay(&mut self) -> Result<Transition> {
        if self.phase != Phase::ChoosingAction || !self.options.show_stay {
            return Err(self.reject("stay"));
        }
        self.options = ActionOptions::hidden();
        self.finish(GameOutcome::Stayed);
        Ok(Transition {
            signals: vec![
                GameSignal::Options(self.options),
                GameSignal::PhaseChanged(Phase::GameOver),
                GameSignal::Feedback(FeedbackKind::Ding),
                GameSignal::Message(final_score_message(self.total_score)),
            ],
            deferred: None,
        })
    }

    pub fn choose_spin_again(&mut self) -> Result<Transition> {
        if self.phase != Phase::ChoosingAction || !self.options.show_spin_again {
            return Err(self.reject("spin again"));
        }
        self.options = ActionOptions::hidden();
        self.set_phase(Phase::Charging);
        Ok(Transition {
            signals: vec![
                GameSignal::Options(self.options),
                GameSignal::PhaseChanged(Phase::Charging),
            ],
            deferred: None,
        })
    }

    /// Back to a fresh game from any phase. Deferred batches from the previous
    /// game stop being current.
    pub fn play_again(&mut self) -> Transition {
        self.epoch += 1;
        self.spin_count = 0;
        self.total_score = 0;
        self.position = 0;
        self.power_level = 0.0;
        self.pending = None;
        self.options = ActionOptions::hidden();
        self.outcome = None;
        self.set_phase(Phase::AwaitingStart);
        Transition {
            signals: vec![
                GameSignal::Options(self.options),
                GameSignal::ScoreChanged(0),
                GameSignal::PhaseChanged(Phase::AwaitingStart),
            ],
            deferred: None,
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        log::info!(
            "game over: {:?} with {} points after {} spins",
            outcome,
            self.total_score,
            self.spin_count
        );
        self.outcome = Some(outcome);
        self.set_phase(Phase::GameOver);
    }

    fn defer(&self, delay_ms: u32, signals: Vec<GameSignal>) -> Deferred {
        Deferred {
            delay_ms,
            epoch: self.epoch,
            phase: self.phase,
            signals,
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        log::debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn reject(&self, action: &'static str) -> GameError {
        log::warn!("rejected {} while {:?}", action, self.phase);
        GameError::InvalidTransition {
            action,
            phase: self.phase,
        }
    }
}
