use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::anim::{AnimEvent, Animator};
use crate::audio::SfxQueue;
use crate::body::Body;

/// Handle to a sprite in the world arena.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SpriteId(pub u32);

/// A spawned entity: physics body plus render-facing sprite state, held as
/// owned components rather than an inheritance chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub body: Body,
    /// Image/spritesheet handle the host renders with.
    pub image: String,
    /// Dead sprites are out of play: no physics, no overlap, no animation.
    pub alive: bool,
    pub visible: bool,
    pub anim: Animator,
}

/// The sprite arena plus world-level physics parameters. The host owns
/// rendering; this is the complete simulation-side state. Sprites live in an
/// ordered map so state snapshots serialize to identical bytes every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub gravity_y: f32,
    sprites: BTreeMap<SpriteId, Sprite>,
    next_id: u32,
    pub sfx: SfxQueue,
}

impl World {
    pub fn new(width: f32, height: f32, gravity_y: f32) -> Self {
        Self {
            width,
            height,
            gravity_y,
            sprites: BTreeMap::new(),
            next_id: 1,
            sfx: SfxQueue::default(),
        }
    }

    pub fn spawn(&mut self, x: f32, y: f32, w: f32, h: f32, image: &str) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        self.sprites.insert(
            id,
            Sprite {
                body: Body::new(x, y, w, h),
                image: image.to_string(),
                alive: true,
                visible: true,
                anim: Animator::default(),
            },
        );
        id
    }

    pub fn sprite(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(&id)
    }

    pub fn sprite_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        self.sprites.get_mut(&id)
    }

    pub fn body(&self, id: SpriteId) -> Option<&Body> {
        self.sprites.get(&id).map(|s| &s.body)
    }

    pub fn body_mut(&mut self, id: SpriteId) -> Option<&mut Body> {
        self.sprites.get_mut(&id).map(|s| &mut s.body)
    }

    pub fn is_alive(&self, id: SpriteId) -> bool {
        self.sprites.get(&id).is_some_and(|s| s.alive)
    }

    /// Take a sprite out of play without removing it from the arena. Its
    /// body is disabled so it never collides or overlaps again.
    pub fn kill(&mut self, id: SpriteId) {
        if let Some(sprite) = self.sprites.get_mut(&id) {
            sprite.alive = false;
            sprite.visible = false;
            sprite.body.enabled = false;
        }
    }

    /// Permanently remove a sprite from the arena.
    pub fn remove(&mut self, id: SpriteId) {
        self.sprites.remove(&id);
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    pub fn alive_count(&self) -> usize {
        self.sprites.values().filter(|s| s.alive).count()
    }

    /// Snapshot of all ids, in ascending order.
    pub fn ids(&self) -> Vec<SpriteId> {
        self.sprites.keys().copied().collect()
    }

    /// Advance every living sprite's animation, collecting one-shot clip
    /// completions for the frame.
    pub fn tick_animations(&mut self, dt: f32) -> Vec<AnimEvent> {
        let mut events = Vec::new();
        let ids = self.ids();
        for id in ids {
            if let Some(sprite) = self.sprites.get_mut(&id) {
                if !sprite.alive {
                    continue;
                }
                if let Some(clip) = sprite.anim.tick(dt) {
                    events.push(AnimEvent::Completed { sprite: id, clip });
                }
            }
        }
        events
    }
}
