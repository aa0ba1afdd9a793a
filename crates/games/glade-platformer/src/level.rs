use serde::{Deserialize, Serialize};

use glade_core::anim::Clip;
use glade_core::level_data::{
    COIN_SIZE, ENEMY_WALL_SIZE, LevelData, PlatformSpec, SpawnPoint, platform_size,
};
use glade_core::world::{SpriteId, World};

use crate::hero::Hero;
use crate::spider::Spider;
use crate::tuning::Tuning;

/// Which platform edge an enemy wall guards. The wall's anchoring differs by
/// side so its collidable face sits exactly on the platform edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
}

/// Looping coin animation.
pub const ROTATE_CLIP: &str = "rotate";

/// Everything a level owns: one collection per entity kind, all spawned from
/// the level descriptor and torn down together on restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<SpriteId>,
    pub coins: Vec<SpriteId>,
    pub spiders: Vec<Spider>,
    pub enemy_walls: Vec<SpriteId>,
    pub hero: Hero,
}

impl Level {
    /// Spawn the whole level in descriptor order: platforms (each with its
    /// paired enemy walls), then hero and spiders, then coins.
    pub fn build(world: &mut World, data: &LevelData, tuning: &Tuning) -> Self {
        let mut platforms = Vec::new();
        let mut enemy_walls = Vec::new();
        for spec in &data.platforms {
            spawn_platform(world, spec, &mut platforms, &mut enemy_walls);
        }

        let hero = Hero::spawn(world, data.hero);
        let spiders = data
            .spiders
            .iter()
            .map(|&at| Spider::spawn(world, at, tuning))
            .collect();

        let coins = data.coins.iter().map(|&at| spawn_coin(world, at)).collect();

        tracing::debug!(
            platforms = data.platforms.len(),
            spiders = data.spiders.len(),
            coins = data.coins.len(),
            "level built"
        );

        Level {
            platforms,
            coins,
            spiders,
            enemy_walls,
            hero,
        }
    }

    pub fn spider_ids(&self) -> Vec<SpriteId> {
        self.spiders.iter().map(|s| s.sprite).collect()
    }
}

/// An immovable, gravity-exempt platform, plus one invisible enemy wall at
/// each horizontal extremity to turn patrolling spiders around.
fn spawn_platform(
    world: &mut World,
    spec: &PlatformSpec,
    platforms: &mut Vec<SpriteId>,
    enemy_walls: &mut Vec<SpriteId>,
) {
    let (w, h) = platform_size(&spec.image);
    let id = world.spawn(spec.x, spec.y, w, h, &spec.image);
    if let Some(body) = world.body_mut(id) {
        body.allow_gravity = false;
        body.immovable = true;
    }
    platforms.push(id);
    enemy_walls.push(spawn_enemy_wall(world, spec.x, spec.y, WallSide::Left));
    enemy_walls.push(spawn_enemy_wall(world, spec.x + w, spec.y, WallSide::Right));
}

/// An invisible immovable wall. A left wall is anchored at its bottom-right
/// corner (it sits flush against the platform's left edge, outside it); a
/// right wall at its bottom-left corner. Only spiders ever collide with it.
fn spawn_enemy_wall(world: &mut World, x: f32, y: f32, side: WallSide) -> SpriteId {
    let (w, h) = ENEMY_WALL_SIZE;
    let left = match side {
        WallSide::Left => x - w,
        WallSide::Right => x,
    };
    let id = world.spawn(left, y - h, w, h, "invisible-wall");
    if let Some(sprite) = world.sprite_mut(id) {
        sprite.visible = false;
        sprite.body.allow_gravity = false;
        sprite.body.immovable = true;
    }
    id
}

/// A gravity-exempt coin spinning in place.
fn spawn_coin(world: &mut World, at: SpawnPoint) -> SpriteId {
    let (w, h) = COIN_SIZE;
    let id = world.spawn(at.x - w / 2.0, at.y - h / 2.0, w, h, "coin");
    if let Some(sprite) = world.sprite_mut(id) {
        sprite.body.allow_gravity = false;
        sprite.anim.add(ROTATE_CLIP, Clip::looping(&[0, 1, 2, 1], 6.0));
        sprite.anim.play(ROTATE_CLIP);
    }
    id
}
