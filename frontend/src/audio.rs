use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use shared::FeedbackKind;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

struct Tone {
    frequency: f32,
    sweep_to: Option<f32>,
    wave: OscillatorType,
    gain: f32,
    seconds: f64,
}

const BEEP: Tone = Tone { frequency: 800.0, sweep_to: None, wave: OscillatorType::Sine, gain: 0.3, seconds: 0.1 };
const DING: Tone = Tone { frequency: 1200.0, sweep_to: None, wave: OscillatorType::Sine, gain: 0.4, seconds: 0.3 };
const BUZZER: Tone = Tone { frequency: 200.0, sweep_to: None, wave: OscillatorType::Sawtooth, gain: 0.5, seconds: 0.8 };
const BOO: Tone = Tone { frequency: 400.0, sweep_to: Some(200.0), wave: OscillatorType::Sawtooth, gain: 0.3, seconds: 1.0 };

const TRIPLE_DING_DELAYS_MS: [u32; 3] = [0, 200, 400];

/// Fire-and-forget sound effects. Every cue is a fresh oscillator, so cues can
/// overlap, and a failure is logged and dropped.
#[derive(Default)]
pub struct SoundBoard {
    context: RefCell<Option<AudioContext>>,
}

impl SoundBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Browsers only start audio from inside a user gesture.
    pub fn unlock(&self) {
        match self.context() {
            Ok(context) => {
                if let Err(err) = context.resume() {
                    log::warn!("Could not resume audio: {:?}", err);
                }
            }
            Err(err) => log::warn!("Audio unavailable: {:?}", err),
        }
    }

    pub fn play(&self, kind: FeedbackKind) {
        if let Err(err) = self.try_play(kind) {
            log::warn!("Could not play {:?}: {:?}", kind, err);
        }
    }

    fn try_play(&self, kind: FeedbackKind) -> Result<(), JsValue> {
        let context = self.context()?;
        match kind {
            FeedbackKind::Beep => play_tone(&context, &BEEP),
            FeedbackKind::Ding => play_tone(&context, &DING),
            FeedbackKind::Buzzer => play_tone(&context, &BUZZER),
            FeedbackKind::Boo => play_tone(&context, &BOO),
            FeedbackKind::TripleDing => {
                for delay in TRIPLE_DING_DELAYS_MS {
                    let context = context.clone();
                    Timeout::new(delay, move || {
                        if let Err(err) = play_tone(&context, &DING) {
                            log::warn!("Could not play ding: {:?}", err);
                        }
                    })
                    .forget();
                }
                Ok(())
            }
        }
    }

    fn context(&self) -> Result<AudioContext, JsValue> {
        if let Some(context) = self.context.borrow().as_ref() {
            return Ok(context.clone());
        }
        let context = AudioContext::new()?;
        *self.context.borrow_mut() = Some(context.clone());
        Ok(context)
    }
}

fn play_tone(context: &AudioContext, tone: &Tone) -> Result<(), JsValue> {
    let oscillator = context.create_oscillator()?;
    let gain = context.create_gain()?;
    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&context.destination())?;

    let now = context.current_time();
    let end = now + tone.seconds;
    oscillator.set_type(tone.wave);
    oscillator.frequency().set_value_at_time(tone.frequency, now)?;
    if let Some(target) = tone.sweep_to {
        oscillator.frequency().exponential_ramp_to_value_at_time(target, end)?;
    }
    gain.gain().set_value_at_time(tone.gain, now)?;
    gain.gain().exponential_ramp_to_value_at_time(0.01, end)?;

    oscillator.start_with_when(now)?;
    oscillator.stop_with_when(end)?;
    Ok(())
}
