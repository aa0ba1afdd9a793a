use serde::{Deserialize, Serialize};

/// Sound effects the game can trigger. The embedding host maps these to
/// actual audio handles; the simulation only queues them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sfx {
    Jump,
    Coin,
    Stomp,
}

/// Trigger-and-forget sound queue, drained by the host once per frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SfxQueue {
    queued: Vec<Sfx>,
}

impl SfxQueue {
    pub fn play(&mut self, sfx: Sfx) {
        self.queued.push(sfx);
    }

    pub fn drain(&mut self) -> Vec<Sfx> {
        std::mem::take(&mut self.queued)
    }

    pub fn pending(&self) -> &[Sfx] {
        &self.queued
    }
}
