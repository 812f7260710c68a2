mod frontend_luck_game;

pub use frontend_luck_game::FrontendLuckGame;
