use serde::{Deserialize, Serialize};

use glade_core::anim::Clip;
use glade_core::level_data::{SPIDER_SIZE, SpawnPoint};
use glade_core::world::{SpriteId, World};

use crate::tuning::Tuning;

/// Looping patrol animation.
pub const CRAWL_CLIP: &str = "crawl";
/// One-shot death animation; the scene removes the spider when it completes.
pub const DIE_CLIP: &str = "die";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpiderState {
    Patrolling,
    Dying,
}

/// Autonomous enemy: walks back and forth between whatever blocks it
/// (enemy walls, platform sides, world bounds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spider {
    pub sprite: SpriteId,
    pub state: SpiderState,
}

impl Spider {
    /// Spawn patrolling rightward with the crawl animation looping.
    pub fn spawn(world: &mut World, at: SpawnPoint, tuning: &Tuning) -> Self {
        let (w, h) = SPIDER_SIZE;
        let sprite = world.spawn(at.x - w / 2.0, at.y - h / 2.0, w, h, "spider");
        if let Some(s) = world.sprite_mut(sprite) {
            s.body.collide_world_bounds = true;
            s.body.vx = tuning.spider_speed;
            s.anim.add(CRAWL_CLIP, Clip::looping(&[0, 1, 2], 8.0));
            s.anim
                .add(DIE_CLIP, Clip::once(&[0, 4, 0, 4, 0, 4, 3, 3, 3, 3, 3, 3], 12.0));
            s.anim.play(CRAWL_CLIP);
        }
        Spider {
            sprite,
            state: SpiderState::Patrolling,
        }
    }

    /// Patrol step: reverse on lateral contact. Reads the contact flags the
    /// physics pass computed earlier this frame. No-op while dying.
    pub fn update(&self, world: &mut World, tuning: &Tuning) {
        if self.state == SpiderState::Dying {
            return;
        }
        if let Some(body) = world.body_mut(self.sprite) {
            if body.on_wall_right() {
                body.vx = -tuning.spider_speed;
            } else if body.on_wall_left() {
                body.vx = tuning.spider_speed;
            }
        }
    }

    /// Enter the dying state: disable the body so nothing can hit it again
    /// and start the one-shot death clip. Safe to call repeatedly — a spider
    /// already dying is left alone (the overlap pass may fire twice in one
    /// frame).
    pub fn die(&mut self, world: &mut World) {
        if self.state == SpiderState::Dying {
            return;
        }
        self.state = SpiderState::Dying;
        if let Some(s) = world.sprite_mut(self.sprite) {
            s.body.enabled = false;
            s.anim.play(DIE_CLIP);
        }
    }

    pub fn is_dying(&self) -> bool {
        self.state == SpiderState::Dying
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (World, Spider, Tuning) {
        let tuning = Tuning::default();
        let mut world = World::new(960.0, 600.0, 1200.0);
        let spider = Spider::spawn(&mut world, SpawnPoint { x: 100.0, y: 50.0 }, &tuning);
        (world, spider, tuning)
    }

    #[test]
    fn spawns_patrolling_rightward_with_crawl_clip() {
        let (world, spider, tuning) = setup();
        assert_eq!(spider.state, SpiderState::Patrolling);
        let sprite = world.sprite(spider.sprite).unwrap();
        assert_eq!(sprite.body.vx, tuning.spider_speed);
        assert_eq!(sprite.anim.current_clip(), Some(CRAWL_CLIP));
    }

    #[test]
    fn reverses_on_right_contact_next_update() {
        let (mut world, spider, tuning) = setup();
        world.body_mut(spider.sprite).unwrap().touching.right = true;
        spider.update(&mut world, &tuning);
        assert_eq!(world.body(spider.sprite).unwrap().vx, -100.0);
    }

    #[test]
    fn reverses_on_left_world_bound() {
        let (mut world, spider, tuning) = setup();
        {
            let body = world.body_mut(spider.sprite).unwrap();
            body.vx = -tuning.spider_speed;
            body.blocked.left = true;
        }
        spider.update(&mut world, &tuning);
        assert_eq!(world.body(spider.sprite).unwrap().vx, 100.0);
    }

    #[test]
    fn keeps_velocity_with_no_contact() {
        let (mut world, spider, tuning) = setup();
        spider.update(&mut world, &tuning);
        assert_eq!(world.body(spider.sprite).unwrap().vx, tuning.spider_speed);
    }

    #[test]
    fn die_disables_body_and_plays_death_clip() {
        let (mut world, mut spider, _) = setup();
        spider.die(&mut world);
        assert!(spider.is_dying());
        let sprite = world.sprite(spider.sprite).unwrap();
        assert!(!sprite.body.enabled);
        assert_eq!(sprite.anim.current_clip(), Some(DIE_CLIP));
    }

    #[test]
    fn die_twice_does_not_restart_the_clip() {
        let (mut world, mut spider, _) = setup();
        spider.die(&mut world);
        // Let the death clip advance a few frames.
        for _ in 0..3 {
            world.sprite_mut(spider.sprite).unwrap().anim.tick(0.1);
        }
        let frame_before = world.sprite(spider.sprite).unwrap().anim.current_frame();
        spider.die(&mut world);
        let frame_after = world.sprite(spider.sprite).unwrap().anim.current_frame();
        assert_eq!(
            frame_before, frame_after,
            "Second die() must not restart the death animation"
        );
    }

    #[test]
    fn dying_spider_skips_patrol_update() {
        let (mut world, mut spider, tuning) = setup();
        spider.die(&mut world);
        world.body_mut(spider.sprite).unwrap().touching.right = true;
        let vx_before = world.body(spider.sprite).unwrap().vx;
        spider.update(&mut world, &tuning);
        assert_eq!(world.body(spider.sprite).unwrap().vx, vx_before);
    }
}
