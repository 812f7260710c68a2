use std::rc::Rc;

use yew::prelude::*;

use crate::audio::SoundBoard;

/// One sound board per component, so the audio context survives re-renders.
#[hook]
pub fn use_sound_board() -> Rc<SoundBoard> {
    use_memo((), |_| SoundBoard::new())
}
