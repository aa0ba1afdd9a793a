use serde::{Deserialize, Serialize};

use glade_core::level_data::{HERO_SIZE, SpawnPoint};
use glade_core::world::{SpriteId, World};

use crate::tuning::Tuning;

/// The player-controlled entity. Holds its sprite handle plus the one piece
/// of derived state the jump gate needs; the body itself lives in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub sprite: SpriteId,
    /// Derived each frame from the body's downward contact.
    pub on_ground: bool,
}

impl Hero {
    /// Spawn at the level's hero point. The spawn coordinate is the sprite
    /// center, matching the level-data convention.
    pub fn spawn(world: &mut World, at: SpawnPoint) -> Self {
        let (w, h) = HERO_SIZE;
        let sprite = world.spawn(at.x - w / 2.0, at.y - h / 2.0, w, h, "hero");
        if let Some(body) = world.body_mut(sprite) {
            body.collide_world_bounds = true;
        }
        Hero {
            sprite,
            on_ground: false,
        }
    }

    /// Re-derive `on_ground` from the frame's contact flags. Called after
    /// collision resolution, before input is applied.
    pub fn refresh_ground(&mut self, world: &World) {
        self.on_ground = world.body(self.sprite).is_some_and(|b| b.on_floor());
    }

    /// Set horizontal velocity to `dir * run_speed`. `dir` is -1, 0, or +1;
    /// non-finite values are treated as 0. Vertical velocity is untouched.
    pub fn run(&self, world: &mut World, dir: f32, tuning: &Tuning) {
        let dir = if dir.is_finite() { dir } else { 0.0 };
        if let Some(body) = world.body_mut(self.sprite) {
            body.vx = dir * tuning.run_speed;
        }
    }

    /// Jump if standing on something. Returns whether the jump happened so
    /// the caller can decide to play the jump sound.
    pub fn jump(&self, world: &mut World, tuning: &Tuning) -> bool {
        if !self.on_ground {
            return false;
        }
        if let Some(body) = world.body_mut(self.sprite) {
            body.vy = -tuning.jump_speed;
        }
        true
    }

    /// Unconditional upward kick after stomping an enemy.
    pub fn bounce(&self, world: &mut World, tuning: &Tuning) {
        if let Some(body) = world.body_mut(self.sprite) {
            body.vy = -tuning.bounce_speed;
        }
    }
}
