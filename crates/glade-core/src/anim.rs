use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::world::SpriteId;

/// A named animation clip: spritesheet frame indices played at a fixed rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub frames: Vec<u32>,
    pub fps: f32,
    pub looping: bool,
}

impl Clip {
    pub fn looping(frames: &[u32], fps: f32) -> Self {
        Self {
            frames: frames.to_vec(),
            fps,
            looping: true,
        }
    }

    pub fn once(frames: &[u32], fps: f32) -> Self {
        Self {
            frames: frames.to_vec(),
            fps,
            looping: false,
        }
    }
}

/// Completion notification for a one-shot clip. Emitted exactly once per
/// `play`, the tick the clip runs out of frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnimEvent {
    Completed { sprite: SpriteId, clip: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Playing {
    clip: String,
    frame_index: usize,
    timer: f32,
    finished: bool,
}

/// Per-sprite animation component: a clip registry plus current playback.
/// The registry is ordered so serialized snapshots are byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Animator {
    clips: BTreeMap<String, Clip>,
    current: Option<Playing>,
}

impl Animator {
    pub fn add(&mut self, name: &str, clip: Clip) {
        self.clips.insert(name.to_string(), clip);
    }

    /// Start (or restart) the named clip. Unknown names are ignored.
    pub fn play(&mut self, name: &str) {
        if !self.clips.contains_key(name) {
            return;
        }
        self.current = Some(Playing {
            clip: name.to_string(),
            frame_index: 0,
            timer: 0.0,
            finished: false,
        });
    }

    /// Name of the clip currently playing, finished or not.
    pub fn current_clip(&self) -> Option<&str> {
        self.current.as_ref().map(|p| p.clip.as_str())
    }

    /// Spritesheet frame to display right now.
    pub fn current_frame(&self) -> Option<u32> {
        let playing = self.current.as_ref()?;
        let clip = self.clips.get(&playing.clip)?;
        clip.frames.get(playing.frame_index).copied()
    }

    /// Advance playback. Returns the completed clip name the tick a one-shot
    /// clip finishes; looping clips wrap and never complete.
    pub fn tick(&mut self, dt: f32) -> Option<String> {
        let playing = self.current.as_mut()?;
        let clip = self.clips.get(&playing.clip)?;
        if playing.finished || clip.frames.is_empty() || clip.fps <= 0.0 {
            return None;
        }

        playing.timer += dt;
        let frame_len = 1.0 / clip.fps;
        while playing.timer >= frame_len {
            playing.timer -= frame_len;
            playing.frame_index += 1;
            if playing.frame_index >= clip.frames.len() {
                if clip.looping {
                    playing.frame_index = 0;
                } else {
                    playing.frame_index = clip.frames.len() - 1;
                    playing.finished = true;
                    return Some(playing.clip.clone());
                }
            }
        }
        None
    }
}
