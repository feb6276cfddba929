//! Game settings
//!
//! Window, pacing and the starting entity layout. Defaults reproduce the
//! classic 800x600 setup; a `pixel_pong.json` next to the binary may
//! override any subset of fields.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::{Color, colors};
use crate::sim::{Ball, Paddle};

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub title: String,
    pub width: u32,
    pub height: u32,

    // === Pacing ===
    /// Fixed sleep after each presented frame
    pub frame_delay_ms: u64,

    // === Scene ===
    pub background: Color,
    /// Keyboard-driven paddle
    pub player: Paddle,
    /// Ball-tracking paddle
    pub opponent: Paddle,
    pub ball: Ball,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            frame_delay_ms: FRAME_DELAY_MS,
            background: colors::BACKGROUND,
            player: Paddle::player(),
            opponent: Paddle::opponent(),
            ball: Ball::default(),
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "pixel_pong.json";

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load `pixel_pong.json` from the working directory, or defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Load settings from `path`. A missing file means defaults; a broken
    /// one is reported and also falls back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_defaults_match_classic_layout() {
        let s = Settings::default();
        assert_eq!((s.width, s.height), (800, 600));
        assert_eq!(s.frame_delay(), Duration::from_millis(16));
        assert_eq!(s.background, Color::new(150, 100, 200));
        assert_eq!(s.player.pos, Vec2::new(100.0, 100.0));
        assert_eq!(s.opponent.pos, Vec2::new(700.0, 100.0));
        assert_eq!((s.player.width, s.player.height), (10, 100));
        assert_eq!(s.ball.pos, Vec2::new(300.0, 300.0));
        assert_eq!(s.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(s.ball.radius, 10);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let s = Settings::from_json(r#"{ "frame_delay_ms": 0, "background": { "r": 0, "g": 0, "b": 0 } }"#)
            .unwrap();
        assert_eq!(s.frame_delay_ms, 0);
        assert_eq!(s.background, Color::new(0, 0, 0));
        assert_eq!(s.width, 800);
        assert_eq!(s.ball, Ball::default());
    }

    #[test]
    fn test_paddle_step_is_not_configurable() {
        let s = Settings::from_json(
            r#"{ "player": { "pos": [100.0, 100.0], "width": 10, "height": 100,
                 "color": { "r": 255, "g": 255, "b": 255 }, "speed": 50.0 } }"#,
        )
        .unwrap();
        assert_eq!(s.player, Paddle::player());

        let mut player = s.player.clone();
        player.update(&crate::sim::TickInput {
            move_down: true,
            ..Default::default()
        });
        assert_eq!(player.pos.y, 100.0 + PADDLE_SPEED);
        assert!(!s.to_json().unwrap().contains("speed"));
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings::default();
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_load_from_missing_or_broken_file() {
        let dir = std::env::temp_dir().join(format!("pixel-pong-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        assert_eq!(Settings::load_from(&dir.join("missing.json")), Settings::default());

        let broken = dir.join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&broken), Settings::default());

        let custom = dir.join("custom.json");
        std::fs::write(&custom, r#"{ "title": "Custom" }"#).unwrap();
        assert_eq!(Settings::load_from(&custom).title, "Custom");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
