use serde::{Deserialize, Serialize};

use crate::audio::Sfx;
use crate::level_data::LevelData;

/// Core trait a hosted scene implements.
///
/// The host owns rendering, asset loading, and the real input devices; the
/// scene only runs the per-frame simulation and reports what happened.
pub trait Scene: Send + Sync {
    /// Build all per-level state from a validated level descriptor.
    fn init(&mut self, level: &LevelData);

    /// Run one frame. Returns the frame's observable events.
    fn update(&mut self, dt: f32, input: &FrameInput) -> Vec<SceneEvent>;

    /// Serialize the full scene state for snapshots.
    fn serialize_state(&self) -> Vec<u8>;

    /// Replace scene state with a previously serialized snapshot.
    fn apply_state(&mut self, state: &[u8]);

    /// Freeze the simulation (updates become no-ops).
    fn pause(&mut self);

    /// Resume after a pause.
    fn resume(&mut self);

    /// Coins collected this level session; the HUD reads this every frame.
    fn score(&self) -> u32;
}

/// Input sampled by the host for one frame.
///
/// `left`/`right` are level-triggered (held state, polled every frame);
/// `jump` is edge-triggered — the host sets it for the one frame the jump
/// key went down, since a jump is a discrete action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Observable outcomes of a frame, consumed by the host (HUD, audio).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    Sfx(Sfx),
    ScoreChanged(u32),
    LevelRestarted,
}

/// Generates the `Scene` methods that are identical across scenes:
/// `serialize_state`, `apply_state`, `pause`, `resume`.
///
/// Requires the implementing struct to have `state: $StateType` and
/// `paused: bool` fields.
#[macro_export]
macro_rules! glade_scene_boilerplate {
    (state_type: $StateType:ty) => {
        fn serialize_state(&self) -> Vec<u8> {
            rmp_serde::to_vec(&self.state).expect("scene state serialization must succeed")
        }

        fn apply_state(&mut self, state: &[u8]) {
            if let Ok(s) = rmp_serde::from_slice::<$StateType>(state) {
                self.state = s;
            }
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn resume(&mut self) {
            self.paused = false;
        }
    };
}
