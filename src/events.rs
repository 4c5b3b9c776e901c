//! Events a session emits each tick for outside collaborators: sound
//! cues, HUD updates, and level flow.

use glam::UVec2;

use crate::map::cell::Chaser;

/// Something that happened during a tick.
///
/// Events report state that has already been applied; the score and
/// pellet count reflect them by the time `update` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PelletEaten { cell: UVec2 },
    EnergizerEaten { cell: UVec2 },
    /// The energizer window ran out; chasers are dangerous again.
    VulnerabilityEnded,
    /// The player caught a capturable chaser; it went home.
    ChaserCaptured { chaser: Chaser },
    /// A chaser caught the player outside a vulnerability window.
    PlayerCaught { lives_left: u8 },
    LevelCleared { level: u32 },
    GameOver { score: u32 },
}
