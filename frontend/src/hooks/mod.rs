pub mod use_key_activate;
pub mod use_sound_board;

pub use use_key_activate::*;
pub use use_sound_board::*;
