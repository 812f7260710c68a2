use gloo_timers::callback::Interval;
use shared::shared_wheel_game::normalize_power;
use yew::prelude::*;

use crate::config::{GAUGE_FRAME_MS, GAUGE_PERIOD_MS};
use crate::styles;

/// Triangle wave in `[0, 1]`: up for half a period, back down for the other half.
pub fn oscillate(elapsed_ms: f64, period_ms: f64) -> f64 {
    if period_ms.is_nan() || period_ms <= 0.0 || !elapsed_ms.is_finite() {
        return 0.0;
    }
    let phase = (elapsed_ms / period_ms).rem_euclid(1.0);
    if phase < 0.5 {
        phase * 2.0
    } else {
        2.0 - phase * 2.0
    }
}

/// Indicator position along the track, in percent.
pub fn indicator_percent(elapsed_ms: f64) -> f64 {
    oscillate(elapsed_ms, GAUGE_PERIOD_MS) * 100.0
}

/// Power captured when the player releases the gauge.
pub fn sample_power(elapsed_ms: f64) -> f64 {
    normalize_power(indicator_percent(elapsed_ms), 0.0, 100.0)
}

#[derive(Properties, PartialEq)]
pub struct PowerGaugeProps {
    pub started_at: f64,
}

#[function_component(PowerGauge)]
pub fn power_gauge(props: &PowerGaugeProps) -> Html {
    let now = use_state(js_sys::Date::now);

    {
        let now = now.clone();
        use_effect_with(props.started_at, move |_| {
            let interval = Interval::new(GAUGE_FRAME_MS, move || now.set(js_sys::Date::now()));
            move || drop(interval)
        });
    }

    let percent = indicator_percent(*now - props.started_at);

    html! {
        <div class={styles::GAUGE_TRACK}>
            <div class={styles::GAUGE_FILL} style={format!("width: {:.1}%", percent)} />
            <div class={styles::GAUGE_INDICATOR} style={format!("left: calc({:.1}% - 0.5rem)", percent)} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillate_triangle() {
        assert_eq!(oscillate(0.0, 1000.0), 0.0);
        assert_eq!(oscillate(250.0, 1000.0), 0.5);
        assert_eq!(oscillate(500.0, 1000.0), 1.0);
        assert_eq!(oscillate(750.0, 1000.0), 0.5);
        assert_eq!(oscillate(1000.0, 1000.0), 0.0);
        assert_eq!(oscillate(300.0, 0.0), 0.0);
    }

    #[test]
    fn test_sample_power_stays_in_range() {
        for step in 0..200 {
            let power = sample_power(step as f64 * 37.0);
            assert!((0.0..=1.0).contains(&power));
        }
        assert_eq!(sample_power(GAUGE_PERIOD_MS / 2.0), 1.0);
    }
}
