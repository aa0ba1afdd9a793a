//! Reference arcade physics: velocity integration, world-bounds clamping,
//! solid AABB separation, and overlap detection. Contact flags computed here
//! are what entity behavior code reads on the following resolution pass.

use crate::body::Body;
use crate::world::{SpriteId, World};

/// Integrate one frame: gravity, velocity, world bounds. Contact flags from
/// the previous frame are cleared here; `collide` calls re-set them.
pub fn step(world: &mut World, dt: f32) {
    let (width, height, gravity_y) = (world.width, world.height, world.gravity_y);
    for id in world.ids() {
        let Some(sprite) = world.sprite_mut(id) else {
            continue;
        };
        if !sprite.alive || !sprite.body.enabled {
            continue;
        }
        let body = &mut sprite.body;
        body.touching.clear();
        body.blocked.clear();
        if body.immovable {
            continue;
        }

        if body.allow_gravity {
            body.vy += gravity_y * dt;
        }
        body.x += body.vx * dt;
        body.y += body.vy * dt;

        if body.collide_world_bounds {
            clamp_to_bounds(body, width, height);
        }
    }
}

fn clamp_to_bounds(body: &mut Body, width: f32, height: f32) {
    if body.x < 0.0 {
        body.x = 0.0;
        body.blocked.left = true;
        if body.vx < 0.0 {
            body.vx = 0.0;
        }
    }
    if body.right() > width {
        body.x = width - body.w;
        body.blocked.right = true;
        if body.vx > 0.0 {
            body.vx = 0.0;
        }
    }
    if body.y < 0.0 {
        body.y = 0.0;
        body.blocked.up = true;
        if body.vy < 0.0 {
            body.vy = 0.0;
        }
    }
    if body.bottom() > height {
        body.y = height - body.h;
        body.blocked.down = true;
        if body.vy > 0.0 {
            body.vy = 0.0;
        }
    }
}

/// Solid collision between each mover and each solid: separate along the
/// minimum-penetration axis, zero the velocity component pointing into the
/// contact, and set `touching` flags on both sides. Only the non-immovable
/// side is displaced.
pub fn collide(world: &mut World, movers: &[SpriteId], solids: &[SpriteId]) {
    for &mover in movers {
        for &solid in solids {
            if mover == solid {
                continue;
            }
            collide_pair(world, mover, solid);
        }
    }
}

fn collide_pair(world: &mut World, mover_id: SpriteId, solid_id: SpriteId) {
    let Some(solid_rect) = active_rect(world, solid_id) else {
        return;
    };
    let Some(mover) = active_body_mut(world, mover_id) else {
        return;
    };
    if mover.immovable || !mover.intersects(&solid_rect) {
        return;
    }

    // Minimum-penetration axis, same resolution scheme as a tile collider.
    let overlap_left = mover.right() - solid_rect.left();
    let overlap_right = solid_rect.right() - mover.left();
    let overlap_top = mover.bottom() - solid_rect.top();
    let overlap_bottom = solid_rect.bottom() - mover.top();

    let min_overlap = overlap_left
        .min(overlap_right)
        .min(overlap_top)
        .min(overlap_bottom);

    let solid_side = if min_overlap == overlap_top {
        // Landed on the solid from above.
        mover.y = solid_rect.top() - mover.h;
        if mover.vy > 0.0 {
            mover.vy = 0.0;
        }
        mover.touching.down = true;
        Side::Up
    } else if min_overlap == overlap_bottom {
        // Bumped the solid's underside.
        mover.y = solid_rect.bottom();
        if mover.vy < 0.0 {
            mover.vy = 0.0;
        }
        mover.touching.up = true;
        Side::Down
    } else if min_overlap == overlap_left {
        mover.x = solid_rect.left() - mover.w;
        if mover.vx > 0.0 {
            mover.vx = 0.0;
        }
        mover.touching.right = true;
        Side::Left
    } else {
        mover.x = solid_rect.right();
        if mover.vx < 0.0 {
            mover.vx = 0.0;
        }
        mover.touching.left = true;
        Side::Right
    };

    if let Some(solid) = active_body_mut(world, solid_id) {
        match solid_side {
            Side::Up => solid.touching.up = true,
            Side::Down => solid.touching.down = true,
            Side::Left => solid.touching.left = true,
            Side::Right => solid.touching.right = true,
        }
    }
}

#[derive(Clone, Copy)]
enum Side {
    Up,
    Down,
    Left,
    Right,
}

/// Overlap detection with no physical response: every intersecting
/// (a, b) pair across the two groups, dead and disabled bodies excluded.
pub fn overlap(world: &World, group_a: &[SpriteId], group_b: &[SpriteId]) -> Vec<(SpriteId, SpriteId)> {
    let mut pairs = Vec::new();
    for &a in group_a {
        let Some(body_a) = active_body(world, a) else {
            continue;
        };
        for &b in group_b {
            if a == b {
                continue;
            }
            let Some(body_b) = active_body(world, b) else {
                continue;
            };
            if body_a.intersects(body_b) {
                pairs.push((a, b));
            }
        }
    }
    pairs
}

fn active_body(world: &World, id: SpriteId) -> Option<&Body> {
    let sprite = world.sprite(id)?;
    if !sprite.alive || !sprite.body.enabled {
        return None;
    }
    Some(&sprite.body)
}

fn active_body_mut(world: &mut World, id: SpriteId) -> Option<&mut Body> {
    let sprite = world.sprite_mut(id)?;
    if !sprite.alive || !sprite.body.enabled {
        return None;
    }
    Some(&mut sprite.body)
}

fn active_rect(world: &World, id: SpriteId) -> Option<Body> {
    active_body(world, id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_960() -> World {
        World::new(960.0, 600.0, 1200.0)
    }

    fn spawn_solid(world: &mut World, x: f32, y: f32, w: f32, h: f32) -> SpriteId {
        let id = world.spawn(x, y, w, h, "platform");
        let body = world.body_mut(id).unwrap();
        body.immovable = true;
        body.allow_gravity = false;
        id
    }

    #[test]
    fn gravity_pulls_down() {
        let mut world = world_960();
        let id = world.spawn(100.0, 100.0, 36.0, 42.0, "hero");
        let y_before = world.body(id).unwrap().y;
        step(&mut world, 0.016);
        assert!(world.body(id).unwrap().y > y_before, "y-down: gravity increases y");
    }

    #[test]
    fn landing_on_solid_zeroes_vy_and_sets_touching_down() {
        let mut world = world_960();
        let floor = spawn_solid(&mut world, 0.0, 500.0, 960.0, 80.0);
        let hero = world.spawn(100.0, 490.0, 36.0, 42.0, "hero");
        world.body_mut(hero).unwrap().vy = 100.0;

        step(&mut world, 0.05);
        collide(&mut world, &[hero], &[floor]);

        let body = world.body(hero).unwrap();
        assert_eq!(body.bottom(), 500.0, "Hero should rest on the floor top");
        assert_eq!(body.vy, 0.0);
        assert!(body.touching.down);
        assert!(world.body(floor).unwrap().touching.up);
    }

    #[test]
    fn head_bump_zeroes_upward_velocity() {
        let mut world = world_960();
        let ceiling = spawn_solid(&mut world, 0.0, 100.0, 960.0, 20.0);
        let hero = world.spawn(100.0, 125.0, 36.0, 42.0, "hero");
        {
            let body = world.body_mut(hero).unwrap();
            body.allow_gravity = false;
            body.vy = -200.0;
        }
        step(&mut world, 0.05);
        collide(&mut world, &[hero], &[ceiling]);

        let body = world.body(hero).unwrap();
        assert_eq!(body.top(), 120.0);
        assert_eq!(body.vy, 0.0);
        assert!(body.touching.up);
    }

    #[test]
    fn side_contact_sets_lateral_touching_and_stops() {
        let mut world = world_960();
        let wall = spawn_solid(&mut world, 200.0, 0.0, 10.0, 600.0);
        let spider = world.spawn(150.0, 280.0, 42.0, 32.0, "spider");
        {
            let body = world.body_mut(spider).unwrap();
            body.allow_gravity = false;
            body.vx = 100.0;
        }
        // 0.1s at 100 px/s moves the right edge past the wall's left face.
        step(&mut world, 0.1);
        collide(&mut world, &[spider], &[wall]);

        let body = world.body(spider).unwrap();
        assert_eq!(body.right(), 200.0, "Spider should be pushed flush to the wall");
        assert_eq!(body.vx, 0.0);
        assert!(body.touching.right);
    }

    #[test]
    fn immovable_solid_is_never_displaced() {
        let mut world = world_960();
        let floor = spawn_solid(&mut world, 0.0, 500.0, 960.0, 80.0);
        let hero = world.spawn(100.0, 480.0, 36.0, 42.0, "hero");
        world.body_mut(hero).unwrap().vy = 400.0;
        let floor_before = world.body(floor).unwrap().clone();

        for _ in 0..10 {
            step(&mut world, 0.016);
            collide(&mut world, &[hero], &[floor]);
        }
        let floor_after = world.body(floor).unwrap();
        assert_eq!(floor_after.x, floor_before.x);
        assert_eq!(floor_after.y, floor_before.y);
    }

    #[test]
    fn world_bounds_block_and_zero_velocity() {
        let mut world = world_960();
        let id = world.spawn(940.0, 100.0, 36.0, 42.0, "hero");
        {
            let body = world.body_mut(id).unwrap();
            body.allow_gravity = false;
            body.collide_world_bounds = true;
            body.vx = 500.0;
        }
        step(&mut world, 0.1);
        let body = world.body(id).unwrap();
        assert_eq!(body.right(), 960.0);
        assert_eq!(body.vx, 0.0);
        assert!(body.blocked.right);
    }

    #[test]
    fn disabled_bodies_do_not_overlap() {
        let mut world = world_960();
        let a = world.spawn(10.0, 10.0, 20.0, 20.0, "a");
        let b = world.spawn(15.0, 15.0, 20.0, 20.0, "b");
        assert_eq!(overlap(&world, &[a], &[b]).len(), 1);
        world.body_mut(b).unwrap().enabled = false;
        assert!(overlap(&world, &[a], &[b]).is_empty());
    }

    #[test]
    fn dead_sprites_do_not_collide() {
        let mut world = world_960();
        let floor = spawn_solid(&mut world, 0.0, 500.0, 960.0, 80.0);
        let hero = world.spawn(100.0, 490.0, 36.0, 42.0, "hero");
        world.body_mut(hero).unwrap().vy = 100.0;
        world.kill(hero);

        step(&mut world, 0.05);
        collide(&mut world, &[hero], &[floor]);
        // Body untouched since the kill disabled it.
        assert!(!world.body(floor).unwrap().touching.any());
    }

    #[test]
    fn overlap_reports_all_pairs() {
        let mut world = world_960();
        let hero = world.spawn(50.0, 50.0, 36.0, 42.0, "hero");
        let near = world.spawn(60.0, 60.0, 22.0, 22.0, "coin");
        let far = world.spawn(500.0, 50.0, 22.0, 22.0, "coin");
        let pairs = overlap(&world, &[hero], &[near, far]);
        assert_eq!(pairs, vec![(hero, near)]);
    }
}
