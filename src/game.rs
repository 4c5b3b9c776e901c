//! The game session: owns the maze and actors, runs the tick loop, and
//! reports what happened as events.
//!
//! Rendering, sound, and input devices live outside; they feed
//! [`GameSession::steer`] and react to the events `update` returns.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::actor::Actor;
use crate::constants::{
    CHASER_SCORE, ENERGIZER_SCORE, MAX_FRAME_SECS, MAX_STEP_SECS, PELLET_SCORE, STARTING_LIVES,
    VULNERABLE_SECS,
};
use crate::error::GameResult;
use crate::events::GameEvent;
use crate::map::cell::{ActorKind, CellKind, Chaser};
use crate::map::direction::Direction;
use crate::map::geometry::BoardGeometry;
use crate::map::grid::Maze;
use crate::systems::movement::{advance_player, resolve_player_step, step_chaser};
use crate::systems::resolver::StepOutcome;

/// A running game: one maze, one player, four chasers, and the score.
///
/// Sessions start paused; call [`GameSession::start`] once the outside
/// world is ready to tick.
#[derive(Debug)]
pub struct GameSession {
    /// The live maze. Cells mutate as the player eats.
    pub maze: Maze,
    pub player: Actor,
    /// In [`Chaser`] index order.
    pub chasers: [Actor; Chaser::COUNT],
    /// Pristine copy used to restock the maze between levels.
    template: Maze,
    rng: SmallRng,
    score: u32,
    lives: u8,
    level: u32,
    paused: bool,
    /// Seconds left on the energizer window, `None` when chasers are
    /// dangerous.
    vulnerable: Option<f32>,
}

impl GameSession {
    /// Parses `document` and builds a session around it.
    pub fn new(document: &str, geometry: BoardGeometry) -> GameResult<GameSession> {
        Self::with_rng(document, geometry, SmallRng::from_os_rng())
    }

    /// Like [`GameSession::new`] but with a caller-chosen seed, for
    /// deterministic runs.
    pub fn with_seed(document: &str, geometry: BoardGeometry, seed: u64) -> GameResult<GameSession> {
        Self::with_rng(document, geometry, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(
        document: &str,
        geometry: BoardGeometry,
        rng: SmallRng,
    ) -> GameResult<GameSession> {
        let maze = Maze::from_document(document, geometry)?;
        let player = Actor::spawn(ActorKind::Player, &maze);
        let chasers = [Chaser::Blinky, Chaser::Clyde, Chaser::Inky, Chaser::Pinky]
            .map(|chaser| Actor::spawn(ActorKind::Chaser(chaser), &maze));

        info!(
            width = maze.width(),
            height = maze.height(),
            pellets = maze.pellets(),
            "Session ready"
        );
        Ok(GameSession {
            template: maze.clone(),
            maze,
            player,
            chasers,
            rng,
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            paused: true,
            vulnerable: None,
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Seconds left on the energizer window, if one is running.
    pub fn vulnerability_remaining(&self) -> Option<f32> {
        self.vulnerable
    }

    pub fn start(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Requests a travel direction for the player. Takes effect on the
    /// next tick where that way is open.
    pub fn steer(&mut self, direction: Direction) {
        self.player.buffered = Some(direction);
    }

    /// Restarts the whole session: restocked maze, starting score and
    /// lives, paused until started again.
    pub fn reset(&mut self) {
        self.maze = self.template.clone();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.vulnerable = None;
        self.paused = true;
        self.reset_actors();
    }

    /// Advances the game by `dt` seconds and returns what happened.
    ///
    /// Time is consumed in slices of at most [`MAX_STEP_SECS`] so a
    /// stalled frame cannot push an actor past the resolver's lookahead,
    /// and one call advances at most [`MAX_FRAME_SECS`]. Per actor the
    /// order inside a slice is fixed: resolve the step, apply its effects
    /// to maze and score, then move. Chasers step only after the player's
    /// outcome is fully applied.
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let mut left = dt.min(MAX_FRAME_SECS);
        while left > 0.0 && !self.paused {
            let slice = left.min(MAX_STEP_SECS);
            self.step(slice, &mut events);
            left -= slice;
        }
        events
    }

    fn step(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        if let Some(remaining) = self.vulnerable {
            let left = remaining - dt;
            if left <= 0.0 {
                self.vulnerable = None;
                events.push(GameEvent::VulnerabilityEnded);
            } else {
                self.vulnerable = Some(left);
            }
        }

        let outcome = resolve_player_step(&mut self.player, &self.maze);
        self.apply_outcome(outcome, events);
        advance_player(&mut self.player, outcome, dt);

        for chaser in &mut self.chasers {
            step_chaser(chaser, &self.maze, dt, &mut self.rng);
        }

        self.resolve_contact(events);

        if self.maze.is_cleared() {
            self.next_level(events);
        }
    }

    fn apply_outcome(&mut self, outcome: StepOutcome, events: &mut Vec<GameEvent>) {
        match outcome {
            StepOutcome::PelletEaten { cell } => {
                match self.maze.set(cell.x, cell.y, CellKind::Empty) {
                    Ok(()) => {
                        self.maze.eat_pellet();
                        self.score += PELLET_SCORE;
                        events.push(GameEvent::PelletEaten { cell });
                    }
                    Err(err) => warn!(%err, "Resolver reported an out-of-range cell"),
                }
            }
            StepOutcome::EnergizerEaten { cell } => {
                match self.maze.set(cell.x, cell.y, CellKind::Empty) {
                    Ok(()) => {
                        self.score += ENERGIZER_SCORE;
                        self.vulnerable = Some(VULNERABLE_SECS);
                        debug!(score = self.score, "Energizer eaten, chasers capturable");
                        events.push(GameEvent::EnergizerEaten { cell });
                    }
                    Err(err) => warn!(%err, "Resolver reported an out-of-range cell"),
                }
            }
            StepOutcome::Blocked | StepOutcome::Clear => {}
        }
    }

    /// Player/chaser overlap: a capture during the energizer window, a
    /// lost life otherwise. At most one life is lost per tick.
    fn resolve_contact(&mut self, events: &mut Vec<GameEvent>) {
        let geometry = self.maze.geometry();
        let player_bounds = self.player.bounds(&geometry);

        let mut caught = false;
        let mut captured: SmallVec<[Chaser; Chaser::COUNT]> = SmallVec::new();
        for chaser in &self.chasers {
            if !player_bounds.intersects(&chaser.bounds(&geometry)) {
                continue;
            }
            let ActorKind::Chaser(which) = chaser.kind else { continue };
            if self.vulnerable.is_some() {
                captured.push(which);
            } else {
                caught = true;
                break;
            }
        }

        if caught {
            self.life_lost(events);
            return;
        }
        for which in captured {
            self.score += CHASER_SCORE;
            self.chasers[which.index()].reset(&self.maze);
            debug!(chaser = %which, score = self.score, "Chaser captured");
            events.push(GameEvent::ChaserCaptured { chaser: which });
        }
    }

    fn life_lost(&mut self, events: &mut Vec<GameEvent>) {
        self.lives = self.lives.saturating_sub(1);
        info!(lives = self.lives, "Player caught");
        events.push(GameEvent::PlayerCaught { lives_left: self.lives });

        // Eaten pellets stay eaten; only the actors go home.
        self.reset_actors();
        self.vulnerable = None;

        if self.lives == 0 {
            self.paused = true;
            info!(score = self.score, "Game over");
            events.push(GameEvent::GameOver { score: self.score });
        }
    }

    fn next_level(&mut self, events: &mut Vec<GameEvent>) {
        info!(level = self.level, score = self.score, "Level cleared");
        events.push(GameEvent::LevelCleared { level: self.level });

        self.level += 1;
        self.maze = self.template.clone();
        self.vulnerable = None;
        self.reset_actors();
    }

    fn reset_actors(&mut self) {
        self.player.reset(&self.maze);
        for chaser in &mut self.chasers {
            chaser.reset(&self.maze);
        }
    }
}
