use serde::{Deserialize, Serialize};

/// Hero horizontal run speed (px/s).
pub const RUN_SPEED: f32 = 200.0;
/// Hero jump launch speed (px/s, applied upward).
pub const JUMP_SPEED: f32 = 600.0;
/// Hero bounce speed after stomping an enemy (px/s, upward).
pub const BOUNCE_SPEED: f32 = 250.0;
/// Spider patrol speed (px/s).
pub const SPIDER_SPEED: f32 = 100.0;
/// Gravity acceleration (px/s^2, downward — y grows down).
pub const GRAVITY: f32 = 1200.0;
/// World width in pixels.
pub const WORLD_WIDTH: f32 = 960.0;
/// World height in pixels.
pub const WORLD_HEIGHT: f32 = 600.0;

/// Tunable gameplay parameters, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub run_speed: f32,
    pub jump_speed: f32,
    pub bounce_speed: f32,
    pub spider_speed: f32,
    pub gravity: f32,
    pub world_width: f32,
    pub world_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            run_speed: RUN_SPEED,
            jump_speed: JUMP_SPEED,
            bounce_speed: BOUNCE_SPEED,
            spider_speed: SPIDER_SPEED,
            gravity: GRAVITY,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
        }
    }
}

impl Tuning {
    /// Load tuning from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("GLADE_PLATFORMER_CONFIG")
            .unwrap_or_else(|_| "config/platformer.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<Tuning>(&content) {
                Ok(tuning) => tuning,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    Tuning::default()
                },
            },
            Err(_) => Tuning::default(),
        }
    }
}
