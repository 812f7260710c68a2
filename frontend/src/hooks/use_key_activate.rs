use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

/// Space and Enter act like a tap on the game area.
#[hook]
pub fn use_key_activate(on_activate: Callback<()>) {
    use_effect_with((), move |_| {
        let listener = window().map(|window| {
            EventListener::new(&window, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.repeat() {
                    return;
                }
                if matches!(event.key().as_str(), " " | "Enter") {
                    event.prevent_default();
                    on_activate.emit(());
                }
            })
        });

        move || drop(listener)
    });
}
