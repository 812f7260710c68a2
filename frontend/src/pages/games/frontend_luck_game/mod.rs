mod luck_utils;
mod power_gauge;
mod wheel_strip;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::{FeedbackKind, GameConfig, GameSession, GameSignal, Phase, SpinAnimation, Transition};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::audio::SoundBoard;
use crate::config::load_game_config;
use crate::hooks::{use_key_activate, use_sound_board};
use crate::styles;

// Import components and utilities from our modules
use luck_utils::{ActionButtons, GameView, MessageOverlay, ScoreBox};
use power_gauge::{sample_power, PowerGauge};
use wheel_strip::WheelStrip;

type Session = GameSession<SmallRng>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn build_session() -> Session {
    match GameSession::with_rng(load_game_config(), SmallRng::from_entropy()) {
        Ok(session) => session,
        Err(err) => {
            log::error!("Falling back to the default game: {}", err);
            GameSession::with_rng(GameConfig::default(), SmallRng::from_entropy())
                .expect("default game config is valid")
        }
    }
}

/// Schedules the next animation frame. Returns false when the browser refused.
fn request_frame(frame: &FrameCallback) -> bool {
    let frame = frame.borrow();
    let (Some(window), Some(callback)) = (window(), frame.as_ref()) else {
        return false;
    };
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(_) => true,
        Err(err) => {
            log::error!("requestAnimationFrame failed: {:?}", err);
            false
        }
    }
}

/// Everything the event handlers share. All fields are shared handles, so
/// clones taken on any render drive the same game.
#[derive(Clone)]
struct GameHandle {
    session: Rc<RefCell<Session>>,
    view: Rc<RefCell<GameView>>,
    sounds: Rc<SoundBoard>,
    gauge_started_at: Rc<Cell<f64>>,
    redraw: UseForceUpdateHandle,
}

impl GameHandle {
    fn activate(&self) {
        self.sounds.unlock();
        let started_at = self.gauge_started_at.get();
        let transition = self
            .session
            .borrow_mut()
            .activate(|| sample_power(js_sys::Date::now() - started_at));
        self.apply(transition);
    }

    fn stay(&self) {
        let result = self.session.borrow_mut().choose_stay();
        self.apply_result(result);
    }

    fn spin_again(&self) {
        let result = self.session.borrow_mut().choose_spin_again();
        self.apply_result(result);
    }

    fn play_again(&self) {
        let transition = self.session.borrow_mut().play_again();
        self.apply(transition);
    }

    fn apply_result(&self, result: shared::Result<Transition>) {
        match result {
            Ok(transition) => self.apply(transition),
            Err(err) => log::warn!("{}", err),
        }
    }

    fn apply(&self, transition: Transition) {
        self.apply_signals(&transition.signals);

        if let Some(deferred) = transition.deferred {
            let handle = self.clone();
            Timeout::new(deferred.delay_ms, move || {
                if !handle.session.borrow().is_current(&deferred) {
                    log::debug!("Dropping stale reveal from game {}", deferred.epoch);
                    return;
                }
                handle.apply_signals(&deferred.signals);
                handle.redraw.force_update();
            })
            .forget();
        }

        self.redraw.force_update();
    }

    fn apply_signals(&self, signals: &[GameSignal]) {
        for signal in signals {
            match signal {
                GameSignal::PhaseChanged(Phase::Charging) => {
                    self.gauge_started_at.set(js_sys::Date::now());
                }
                GameSignal::SpinOutcome { animation, .. } => self.animate(*animation),
                _ => {}
            }

            let feedback = self.view.borrow_mut().apply(signal);
            if let Some(kind) = feedback {
                self.sounds.play(kind);
            }
        }
    }

    fn animate(&self, animation: SpinAnimation) {
        let handle = self.clone();
        let epoch = self.session.borrow().epoch();
        let started_at = js_sys::Date::now();
        let mut last_progress = 0.0;

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let next_frame = frame.clone();

        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let still_spinning = {
                let session = handle.session.borrow();
                session.epoch() == epoch && session.phase() == Phase::Spinning
            };
            if !still_spinning {
                next_frame.borrow_mut().take();
                return;
            }

            let progress = animation.progress_at(js_sys::Date::now() - started_at);
            if animation.ticks_between(last_progress, progress) > 0 {
                handle.sounds.play(FeedbackKind::Beep);
            }
            last_progress = progress;
            handle.view.borrow_mut().wheel_offset = animation.offset(progress);
            handle.redraw.force_update();

            if progress < 1.0 && request_frame(&next_frame) {
                return;
            }

            // Last frame: drop the closure's reference to itself.
            next_frame.borrow_mut().take();
            handle.finish_spin(&animation);
        }) as Box<dyn FnMut()>));

        if !request_frame(&frame) {
            frame.borrow_mut().take();
            self.finish_spin(&animation);
        }
    }

    fn finish_spin(&self, animation: &SpinAnimation) {
        self.view.borrow_mut().wheel_offset = animation.offset(1.0);
        let result = self.session.borrow_mut().spin_finished();
        self.apply_result(result);
    }
}

#[function_component(FrontendLuckGame)]
pub fn frontend_luck_game() -> Html {
    let session = use_mut_ref(build_session);
    let view = use_mut_ref(GameView::new);
    let gauge_started_at = use_memo((), |_| Cell::new(0.0));
    let sounds = use_sound_board();
    let redraw = use_force_update();

    let handle = GameHandle {
        session: session.clone(),
        view: view.clone(),
        sounds,
        gauge_started_at: gauge_started_at.clone(),
        redraw,
    };

    use_key_activate({
        let handle = handle.clone();
        Callback::from(move |_| handle.activate())
    });

    let on_activate = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| handle.activate())
    };

    // Buttons sit inside the tap area; their clicks must not also activate.
    let on_stay = {
        let handle = handle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            handle.stay();
        })
    };

    let on_spin_again = {
        let handle = handle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            handle.spin_again();
        })
    };

    let on_play_again = {
        let handle = handle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            handle.play_again();
        })
    };

    let values = session.borrow().wheel().values().to_vec();
    let view = view.borrow().clone();

    html! {
        <div class={styles::GAME_CONTAINER} onclick={on_activate}>
            <h1 class={styles::TITLE}>{"Press Your Luck"}</h1>

            <WheelStrip
                values={values}
                offset={view.wheel_offset}
                spinning={view.phase == Phase::Spinning}
            />

            if view.show_score {
                <ScoreBox score={view.score} />
            }

            if view.phase == Phase::AwaitingStart {
                <p class={styles::START_PROMPT}>{"Tap to start"}</p>
            }

            if view.phase == Phase::Charging {
                <PowerGauge started_at={gauge_started_at.get()} />
            }

            <ActionButtons
                options={view.options}
                on_stay={on_stay}
                on_spin_again={on_spin_again}
            />

            if let Some(message) = view.message.clone() {
                <MessageOverlay message={message} on_play_again={on_play_again} />
            }
        </div>
    }
}
