use shared::{ActionOptions, FeedbackKind, GameSignal, Phase};
use yew::prelude::*;

use crate::styles;

/// What the screen shows. Built only from the session's signals.
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub phase: Phase,
    pub score: u32,
    pub show_score: bool,
    pub options: ActionOptions,
    pub message: Option<String>,
    /// Unwrapped segment offset under the pointer.
    pub wheel_offset: f64,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            phase: Phase::AwaitingStart,
            score: 0,
            show_score: false,
            options: ActionOptions::hidden(),
            message: None,
            wheel_offset: 0.0,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one signal into the view. Returns the sound to play, if any.
    pub fn apply(&mut self, signal: &GameSignal) -> Option<FeedbackKind> {
        match signal {
            GameSignal::PhaseChanged(phase) => {
                self.phase = *phase;
                if *phase == Phase::AwaitingStart {
                    *self = Self::default();
                }
            }
            GameSignal::ScoreChanged(score) => {
                self.score = *score;
                self.show_score = true;
            }
            GameSignal::Options(options) => self.options = *options,
            GameSignal::Message(message) => self.message = Some(message.clone()),
            GameSignal::Feedback(kind) => return Some(*kind),
            GameSignal::SpinOutcome { .. } => {}
        }
        None
    }
}

#[derive(Properties, PartialEq)]
pub struct ScoreBoxProps {
    pub score: u32,
}

#[function_component(ScoreBox)]
pub fn score_box(props: &ScoreBoxProps) -> Html {
    html! {
        <div class={styles::SCORE_BOX}>
            <div class={styles::SCORE_LABEL}>{"Score"}</div>
            <div class={styles::SCORE_VALUE}>{props.score}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActionButtonsProps {
    pub options: ActionOptions,
    pub on_stay: Callback<MouseEvent>,
    pub on_spin_again: Callback<MouseEvent>,
}

#[function_component(ActionButtons)]
pub fn action_buttons(props: &ActionButtonsProps) -> Html {
    if !props.options.show_stay && !props.options.show_spin_again {
        return html! {};
    }

    html! {
        <div class={styles::ACTION_ROW}>
            if props.options.show_stay {
                <button class={styles::BUTTON_STAY} onclick={props.on_stay.clone()}>{"Stay"}</button>
            }
            if props.options.show_spin_again {
                <button class={styles::BUTTON_SPIN} onclick={props.on_spin_again.clone()}>{"Spin Again"}</button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageOverlayProps {
    pub message: String,
    pub on_play_again: Callback<MouseEvent>,
}

#[function_component(MessageOverlay)]
pub fn message_overlay(props: &MessageOverlayProps) -> Html {
    html! {
        <div class={styles::OVERLAY}>
            <p class={styles::OVERLAY_TEXT}>{&props.message}</p>
            <button class={styles::BUTTON_PLAY_AGAIN} onclick={props.on_play_again.clone()}>
                {"Play Again"}
            </button>
        </div>
    }
}
