use shared::GameConfig;
use web_sys::window;

const CONFIG_STORAGE_KEY: &str = "press_your_luck.config";

// Presentation tunables
pub const SEGMENT_HEIGHT_PX: f64 = 96.0;
pub const VISIBLE_SEGMENTS: f64 = 3.0;
pub const GAUGE_PERIOD_MS: f64 = 1200.0;
pub const GAUGE_FRAME_MS: u32 = 16;

/// Game config from local storage, or the defaults when nothing usable is stored.
pub fn load_game_config() -> GameConfig {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match stored {
        Some(raw) => parse_game_config(&raw).unwrap_or_else(|err| {
            log::warn!("Ignoring stored game config: {}", err);
            GameConfig::default()
        }),
        None => GameConfig::default(),
    }
}

pub fn parse_game_config(raw: &str) -> Result<GameConfig, String> {
    let config: GameConfig = serde_json::from_str(raw)
        .map_err(|e| format!("Error parsing config: {}", e))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_game_config() {
        let config = parse_game_config(r#"{ "target_score": 50 }"#).unwrap();
        assert_eq!(config.target_score, 50);
        assert_eq!(config.max_spins, 2);

        assert!(parse_game_config("not json").is_err());
        assert!(parse_game_config(r#"{ "wheel_values": [] }"#).is_err());
        assert!(parse_game_config(r#"{ "wheel_values": [3000000000], "target_score": 4294967295 }"#).is_err());
        assert!(parse_game_config(r#"{ "spin": { "max_rotations": 1e300 } }"#).is_err());
    }
}
