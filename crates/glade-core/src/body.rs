use serde::{Deserialize, Serialize};

/// Directional contact flags, recomputed by the physics step each frame.
///
/// `touching` is set by solid collisions against another body, `blocked` by
/// the world bounds. Behavior code usually checks both (a spider turns around
/// whether it hit an enemy wall or the edge of the world).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Contacts {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Axis-aligned physics body. Coordinates are y-down (gravity is positive,
/// jump velocity is negative); `x`/`y` is the top-left corner of the rect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    pub vy: f32,
    /// Gravity is applied during integration only when set.
    pub allow_gravity: bool,
    /// Immovable bodies are never displaced by collision separation.
    pub immovable: bool,
    /// Clamp to the world rect during integration, setting `blocked` flags.
    pub collide_world_bounds: bool,
    /// Disabled bodies take part in no integration, collision, or overlap.
    pub enabled: bool,
    pub touching: Contacts,
    pub blocked: Contacts,
}

impl Body {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            vx: 0.0,
            vy: 0.0,
            allow_gravity: true,
            immovable: false,
            collide_world_bounds: false,
            enabled: true,
            touching: Contacts::default(),
            blocked: Contacts::default(),
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// AABB overlap test against another body.
    pub fn intersects(&self, other: &Body) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Standing on something: downward contact from a body or a world bound.
    pub fn on_floor(&self) -> bool {
        self.touching.down || self.blocked.down
    }

    pub fn on_wall_right(&self) -> bool {
        self.touching.right || self.blocked.right
    }

    pub fn on_wall_left(&self) -> bool {
        self.touching.left || self.blocked.left
    }
}
