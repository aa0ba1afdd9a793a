pub mod collision;
pub mod hero;
pub mod level;
pub mod spider;
pub mod tuning;

use serde::{Deserialize, Serialize};

use glade_core::anim::AnimEvent;
use glade_core::audio::Sfx;
use glade_core::glade_scene_boilerplate;
use glade_core::level_data::LevelData;
use glade_core::physics;
use glade_core::scene::{FrameInput, Scene, SceneEvent};
use glade_core::world::World;

use level::Level;
use tuning::Tuning;

/// The bundled first level, in the host's level-data format.
pub const LEVEL_ONE_JSON: &str = include_str!("../data/level01.json");

/// Parse the bundled level.
pub fn level_one() -> LevelData {
    LevelData::from_json(LEVEL_ONE_JSON).expect("bundled level data must parse")
}

/// Serializable per-level state: the sprite world, the level's entity
/// collections, and the session score. Rebuilt wholesale on restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayState {
    pub world: World,
    pub level: Level,
    pub score: u32,
}

impl PlayState {
    fn build(data: &LevelData, tuning: &Tuning) -> Self {
        let mut world = World::new(tuning.world_width, tuning.world_height, tuning.gravity);
        let level = Level::build(&mut world, data, tuning);
        PlayState {
            world,
            level,
            score: 0,
        }
    }
}

/// The per-frame level driver. Owns all per-level state explicitly — a
/// restart destroys and reconstructs `state` from the retained descriptor.
pub struct PlayScene {
    state: PlayState,
    data: LevelData,
    tuning: Tuning,
    paused: bool,
}

impl PlayScene {
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        let data = LevelData {
            platforms: Vec::new(),
            hero: glade_core::level_data::SpawnPoint { x: 0.0, y: 0.0 },
            spiders: Vec::new(),
            coins: Vec::new(),
        };
        let state = PlayState::build(&data, &tuning);
        Self {
            state,
            data,
            tuning,
            paused: false,
        }
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    /// Hard reset: throw away all per-level state and respawn everything
    /// from the level descriptor. Score goes back to zero.
    fn restart(&mut self) {
        tracing::info!("level restarted");
        self.state = PlayState::build(&self.data, &self.tuning);
    }
}

impl Default for PlayScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for PlayScene {
    fn init(&mut self, level: &LevelData) {
        self.data = level.clone();
        self.state = PlayState::build(level, &self.tuning);
        self.paused = false;
    }

    fn update(&mut self, dt: f32, input: &FrameInput) -> Vec<SceneEvent> {
        if self.paused {
            return Vec::new();
        }
        let mut events = Vec::new();
        let st = &mut self.state;

        // Host physics: integrate previous frame's velocities, clamp to
        // world bounds, clear contact flags for this frame.
        physics::step(&mut st.world, dt);

        // Contact resolution and outcome handlers.
        let outcome = collision::resolve(&mut st.world, &mut st.level, &self.tuning);
        if outcome.coins_collected > 0 {
            st.score += outcome.coins_collected;
            events.push(SceneEvent::ScoreChanged(st.score));
        }

        // Enemy behavior, skipped automatically for dying spiders.
        for spider in &st.level.spiders {
            spider.update(&mut st.world, &self.tuning);
        }

        // Animation playback; a finished death clip removes the spider from
        // the world for good.
        for event in st.world.tick_animations(dt) {
            let AnimEvent::Completed { sprite, clip } = event;
            if clip == spider::DIE_CLIP {
                st.world.remove(sprite);
                st.level.spiders.retain(|s| s.sprite != sprite);
            }
        }

        // Input: left wins if both directions are held; jump is an edge
        // event and only makes a sound when it actually happens.
        st.level.hero.refresh_ground(&st.world);
        let dir = if input.left {
            -1.0
        } else if input.right {
            1.0
        } else {
            0.0
        };
        st.level.hero.run(&mut st.world, dir, &self.tuning);
        if input.jump && st.level.hero.jump(&mut st.world, &self.tuning) {
            st.world.sfx.play(Sfx::Jump);
        }

        for sfx in st.world.sfx.drain() {
            events.push(SceneEvent::Sfx(sfx));
        }

        // A lethal enemy contact restarts the whole level. Runs last so the
        // frame's sounds still reach the host.
        if outcome.hero_died {
            self.restart();
            events.push(SceneEvent::LevelRestarted);
        }

        events
    }

    glade_scene_boilerplate!(state_type: PlayState);

    fn score(&self) -> u32 {
        self.state.score
    }
}
