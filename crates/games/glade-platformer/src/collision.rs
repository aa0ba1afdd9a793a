//! Per-frame collision schedule and outcome handlers. Solid passes keep
//! entities on surfaces and set the contact flags behavior code reads;
//! overlap passes turn detected pairs into game outcomes.

use glade_core::audio::Sfx;
use glade_core::physics;
use glade_core::world::{SpriteId, World};

use crate::level::Level;
use crate::tuning::Tuning;

/// What the resolution pass did this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub coins_collected: u32,
    pub spiders_stomped: u32,
    /// A non-stomp enemy contact happened; the scene must restart the level.
    pub hero_died: bool,
}

/// Result of a single hero-vs-enemy contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnemyContact {
    Stomped,
    Lethal,
}

/// Run the frame's collision schedule in the fixed order: solids first
/// (hero/platforms, spiders/platforms, spiders/walls), then overlaps
/// (hero/coins, hero/spiders).
pub fn resolve(world: &mut World, level: &mut Level, tuning: &Tuning) -> FrameOutcome {
    let mut outcome = FrameOutcome::default();
    let hero_id = level.hero.sprite;
    let spider_ids = level.spider_ids();

    physics::collide(world, &[hero_id], &level.platforms);
    physics::collide(world, &spider_ids, &level.platforms);
    physics::collide(world, &spider_ids, &level.enemy_walls);

    for (_, coin) in physics::overlap(world, &[hero_id], &level.coins) {
        on_hero_vs_coin(world, level, coin, &mut outcome);
    }

    // Dying spiders have disabled bodies, so overlap never reports them.
    for (_, spider_id) in physics::overlap(world, &[hero_id], &spider_ids) {
        match on_hero_vs_enemy(world, level, spider_id, tuning) {
            EnemyContact::Stomped => outcome.spiders_stomped += 1,
            EnemyContact::Lethal => {
                outcome.hero_died = true;
                break;
            },
        }
    }

    outcome
}

/// Coin pickup: the coin leaves play immediately, the pickup sound fires.
fn on_hero_vs_coin(
    world: &mut World,
    level: &mut Level,
    coin: SpriteId,
    outcome: &mut FrameOutcome,
) {
    world.kill(coin);
    level.coins.retain(|&c| c != coin);
    outcome.coins_collected += 1;
    world.sfx.play(Sfx::Coin);
}

/// Enemy contact: the hero's vertical velocity sign at contact decides.
/// Moving downward (vy strictly positive, y-down) is a stomp — the hero
/// bounces and the spider dies. Anything else, including purely horizontal
/// contact, is lethal for the hero. The stomp sound fires either way.
fn on_hero_vs_enemy(
    world: &mut World,
    level: &mut Level,
    spider_id: SpriteId,
    tuning: &Tuning,
) -> EnemyContact {
    let falling = world
        .body(level.hero.sprite)
        .is_some_and(|b| b.vy > 0.0);
    world.sfx.play(Sfx::Stomp);
    if falling {
        level.hero.bounce(world, tuning);
        if let Some(spider) = level.spiders.iter_mut().find(|s| s.sprite == spider_id) {
            spider.die(world);
        }
        EnemyContact::Stomped
    } else {
        EnemyContact::Lethal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glade_core::level_data::{LevelData, PlatformSpec, SpawnPoint};

    fn level_with(spiders: &[(f32, f32)], coins: &[(f32, f32)]) -> (World, Level, Tuning) {
        let tuning = Tuning::default();
        let data = LevelData {
            platforms: vec![PlatformSpec {
                x: 0.0,
                y: 546.0,
                image: "ground".to_string(),
            }],
            hero: SpawnPoint { x: 480.0, y: 300.0 },
            spiders: spiders.iter().map(|&(x, y)| SpawnPoint { x, y }).collect(),
            coins: coins.iter().map(|&(x, y)| SpawnPoint { x, y }).collect(),
        };
        let mut world = World::new(tuning.world_width, tuning.world_height, tuning.gravity);
        let level = Level::build(&mut world, &data, &tuning);
        (world, level, tuning)
    }

    fn move_hero_onto(world: &mut World, level: &Level, x: f32, y: f32, vy: f32) {
        let hero = world.body_mut(level.hero.sprite).unwrap();
        hero.x = x - hero.w / 2.0;
        hero.y = y - hero.h / 2.0;
        hero.vy = vy;
    }

    #[test]
    fn coin_pickup_scores_and_removes_coin() {
        let (mut world, mut level, tuning) = level_with(&[], &[(480.0, 300.0)]);
        let outcome = resolve(&mut world, &mut level, &tuning);
        assert_eq!(outcome.coins_collected, 1);
        assert!(level.coins.is_empty());
        assert_eq!(world.alive_count(), world.sprite_count() - 1);
        assert_eq!(world.sfx.pending(), &[Sfx::Coin]);
        assert!(!outcome.hero_died);
    }

    #[test]
    fn collected_coin_cannot_be_collected_again() {
        let (mut world, mut level, tuning) = level_with(&[], &[(480.0, 300.0)]);
        resolve(&mut world, &mut level, &tuning);
        let outcome = resolve(&mut world, &mut level, &tuning);
        assert_eq!(outcome.coins_collected, 0);
    }

    #[test]
    fn falling_contact_stomps_the_spider() {
        let (mut world, mut level, tuning) = level_with(&[(480.0, 300.0)], &[]);
        move_hero_onto(&mut world, &level, 480.0, 290.0, 50.0);

        let outcome = resolve(&mut world, &mut level, &tuning);

        assert_eq!(outcome.spiders_stomped, 1);
        assert!(!outcome.hero_died, "A stomp must never restart the level");
        assert!(level.spiders[0].is_dying());
        assert_eq!(
            world.body(level.hero.sprite).unwrap().vy,
            -tuning.bounce_speed,
            "Hero must bounce off the stomped spider"
        );
        assert_eq!(world.sfx.pending(), &[Sfx::Stomp]);
    }

    #[test]
    fn side_contact_is_lethal_and_spider_survives() {
        let (mut world, mut level, tuning) = level_with(&[(480.0, 300.0)], &[]);
        // Purely horizontal approach: vy exactly zero.
        move_hero_onto(&mut world, &level, 460.0, 300.0, 0.0);

        let outcome = resolve(&mut world, &mut level, &tuning);

        assert!(outcome.hero_died);
        assert_eq!(outcome.spiders_stomped, 0);
        assert!(!level.spiders[0].is_dying(), "Spider survives a lethal contact");
        assert_eq!(world.sfx.pending(), &[Sfx::Stomp]);
    }

    #[test]
    fn upward_contact_is_lethal() {
        let (mut world, mut level, tuning) = level_with(&[(480.0, 300.0)], &[]);
        move_hero_onto(&mut world, &level, 480.0, 310.0, -200.0);
        let outcome = resolve(&mut world, &mut level, &tuning);
        assert!(outcome.hero_died);
    }

    #[test]
    fn dying_spider_is_ignored_by_overlap() {
        let (mut world, mut level, tuning) = level_with(&[(480.0, 300.0)], &[]);
        level.spiders[0].die(&mut world);
        move_hero_onto(&mut world, &level, 480.0, 300.0, 0.0);

        let outcome = resolve(&mut world, &mut level, &tuning);
        assert!(!outcome.hero_died, "A dying spider can no longer hurt the hero");
        assert_eq!(outcome.spiders_stomped, 0);
    }

    #[test]
    fn spider_turns_at_enemy_wall() {
        let (mut world, mut level, tuning) = level_with(&[(900.0, 300.0)], &[]);
        // Walk the spider into the ground platform's right wall.
        let spider = level.spiders[0];
        {
            let body = world.body_mut(spider.sprite).unwrap();
            body.y = 546.0 - body.h; // standing on the ground platform
            body.allow_gravity = false;
        }
        for _ in 0..120 {
            glade_core::physics::step(&mut world, 1.0 / 60.0);
            resolve(&mut world, &mut level, &tuning);
            for s in &level.spiders {
                s.update(&mut world, &tuning);
            }
        }
        let body = world.body(spider.sprite).unwrap();
        assert!(
            body.vx < 0.0,
            "Spider should have reversed at the right enemy wall, vx={}",
            body.vx
        );
        assert!(
            body.right() <= 970.0,
            "Spider must not pass the wall face, right={}",
            body.right()
        );
    }
}
