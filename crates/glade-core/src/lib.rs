pub mod anim;
pub mod audio;
pub mod body;
pub mod level_data;
pub mod physics;
pub mod scene;
pub mod world;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::level_data::{LevelData, PlatformSpec, SpawnPoint};
    use crate::scene::{FrameInput, Scene, SceneEvent};

    /// A minimal level: one full-width ground platform, the hero on the
    /// left, one patrolling spider, one coin between them.
    pub fn one_platform_level() -> LevelData {
        LevelData {
            platforms: vec![PlatformSpec {
                x: 0.0,
                y: 546.0,
                image: "ground".to_string(),
            }],
            hero: SpawnPoint { x: 50.0, y: 50.0 },
            spiders: vec![SpawnPoint { x: 100.0, y: 50.0 }],
            coins: vec![SpawnPoint { x: 80.0, y: 50.0 }],
        }
    }

    /// Run N frames with the given held input, returning all events.
    pub fn run_frames(
        scene: &mut dyn Scene,
        n: usize,
        dt: f32,
        input: FrameInput,
    ) -> Vec<SceneEvent> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(scene.update(dt, &input));
        }
        all_events
    }

    /// Assert that the scene's serialized state differs from `before`.
    pub fn assert_scene_state_changed(scene: &dyn Scene, before: &[u8]) {
        let after = scene.serialize_state();
        assert_ne!(
            before,
            &after[..],
            "Scene state should have changed after operation"
        );
    }

    // ================================================================
    // Scene Trait Contract Tests
    // ================================================================
    // A generic suite every Scene implementation must pass. Scene crates
    // call these from their own #[cfg(test)] modules.

    /// After init(), serialize_state() must return non-empty bytes.
    pub fn contract_init_creates_state(scene: &mut dyn Scene) {
        scene.init(&one_platform_level());
        let state = scene.serialize_state();
        assert!(
            !state.is_empty(),
            "serialize_state() must return non-empty bytes after init"
        );
    }

    /// update() with held directional input must change state.
    pub fn contract_input_changes_state(scene: &mut dyn Scene) {
        scene.init(&one_platform_level());
        let before = scene.serialize_state();
        let input = FrameInput {
            right: true,
            ..Default::default()
        };
        scene.update(1.0 / 60.0, &input);
        assert_scene_state_changed(scene, &before);
    }

    /// serialize → apply → serialize must reproduce the exact bytes, on the
    /// first roundtrip and every one after.
    pub fn contract_state_roundtrip_stable(scene: &mut dyn Scene) {
        scene.init(&one_platform_level());
        let state_a = scene.serialize_state();
        scene.apply_state(&state_a);
        let state_b = scene.serialize_state();
        assert_eq!(
            state_a, state_b,
            "State must be stable after serialize→apply→serialize roundtrip"
        );
        scene.apply_state(&state_b);
        let state_c = scene.serialize_state();
        assert_eq!(state_b, state_c, "Roundtrip stability must not decay");
    }

    /// pause() must freeze the simulation, resume() must unfreeze it.
    pub fn contract_pause_freezes_state(scene: &mut dyn Scene) {
        scene.init(&one_platform_level());
        scene.pause();
        let before = scene.serialize_state();
        scene.update(1.0 / 60.0, &FrameInput::default());
        let during_pause = scene.serialize_state();
        assert_eq!(before, during_pause, "State must not change while paused");

        scene.resume();
        scene.update(1.0 / 60.0, &FrameInput::default());
        assert_scene_state_changed(scene, &during_pause);
    }
}
