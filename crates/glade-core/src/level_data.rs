use serde::{Deserialize, Serialize};

/// Pixel footprint of the invisible enemy-wall sprite.
pub const ENEMY_WALL_SIZE: (f32, f32) = (10.0, 42.0);
/// Hero spritesheet frame size.
pub const HERO_SIZE: (f32, f32) = (36.0, 42.0);
/// Spider spritesheet frame size.
pub const SPIDER_SIZE: (f32, f32) = (42.0, 32.0);
/// Coin spritesheet frame size.
pub const COIN_SIZE: (f32, f32) = (22.0, 22.0);

/// Fixed palette of platform images and their pixel sizes. Platform width is
/// carried by the image choice, not by the level data.
const PLATFORM_PALETTE: &[(&str, (f32, f32))] = &[
    ("ground", (960.0, 80.0)),
    ("grass:8x1", (336.0, 42.0)),
    ("grass:6x1", (252.0, 42.0)),
    ("grass:4x1", (168.0, 42.0)),
    ("grass:2x1", (84.0, 42.0)),
    ("grass:1x1", (42.0, 42.0)),
];

/// Size in pixels of a platform image. Unknown images fall back to the
/// single-tile size so a typo'd level still loads.
pub fn platform_size(image: &str) -> (f32, f32) {
    PLATFORM_PALETTE
        .iter()
        .find(|(name, _)| *name == image)
        .map(|&(_, size)| size)
        .unwrap_or((42.0, 42.0))
}

/// A platform entry: position plus one of the palette images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub image: String,
}

/// A bare spawn position (hero, spiders, coins).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

/// The level descriptor the host hands to a scene. Validated at load time by
/// the loader; the simulation treats it as a trusted precondition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub platforms: Vec<PlatformSpec>,
    pub hero: SpawnPoint,
    pub spiders: Vec<SpawnPoint>,
    pub coins: Vec<SpawnPoint>,
}

impl LevelData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
