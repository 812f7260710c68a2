use shared::shared_wheel_game::wrap_index;
use yew::prelude::*;

use crate::config::{SEGMENT_HEIGHT_PX, VISIBLE_SEGMENTS};
use crate::styles;

// The strip is drawn three times over so any offset has a full wheel of
// segments above and below the pointer.
const STRIP_COPIES: usize = 3;

/// Vertical translation that centers `offset` under the pointer.
pub fn strip_translate_px(offset: f64, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    let wrapped = offset.rem_euclid(len as f64) + len as f64;
    let window = SEGMENT_HEIGHT_PX * VISIBLE_SEGMENTS;
    -wrapped * SEGMENT_HEIGHT_PX + (window - SEGMENT_HEIGHT_PX) / 2.0
}

fn segment_color(value: u32) -> &'static str {
    match value {
        100 => "bg-yellow-500",
        75..=99 => "bg-green-600",
        50..=74 => "bg-blue-600",
        25..=49 => "bg-purple-600",
        _ => "bg-pink-600",
    }
}

#[derive(Properties, PartialEq)]
pub struct WheelStripProps {
    pub values: Vec<u32>,
    pub offset: f64,
    pub spinning: bool,
}

#[function_component(WheelStrip)]
pub fn wheel_strip(props: &WheelStripProps) -> Html {
    let len = props.values.len();
    let translate = strip_translate_px(props.offset, len);
    let under_pointer = if len == 0 {
        None
    } else {
        Some(wrap_index(props.offset.round() as i64, len))
    };

    html! {
        <div class={styles::WHEEL_WINDOW} style={format!("height: {}px", SEGMENT_HEIGHT_PX * VISIBLE_SEGMENTS)}>
            <div style={format!("transform: translateY({:.2}px)", translate)}>
                { for (0..len * STRIP_COPIES).map(|i| {
                    let index = i % len;
                    let value = props.values[index];
                    let active = !props.spinning && under_pointer == Some(index);
                    html! {
                        <div
                            key={i}
                            class={classes!(styles::SEGMENT, segment_color(value), active.then_some(styles::SEGMENT_ACTIVE))}
                            style={format!("height: {}px", SEGMENT_HEIGHT_PX)}
                        >
                            {value}
                        </div>
                    }
                }) }
            </div>
            <div class={styles::WHEEL_POINTER} style={format!("height: {}px", SEGMENT_HEIGHT_PX)} />
        </div>
    }
}
