//! Game session: owns the simulation and its store
//!
//! The simulation only reports what happened; this is where those events turn
//! into storage writes and where the loop learns whether to keep scheduling.

use crate::persistence::ProgressStore;
use crate::sim::{GameEvent, GameState, TickInput, Viewport, tick};
use crate::tuning::Tuning;

/// Whether the frame loop should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Round still running; render and schedule the next frame
    Continue,
    /// Round ended this frame (or earlier); stop scheduling until restart
    Stopped,
}

pub struct Session<S: ProgressStore> {
    state: GameState,
    store: S,
    /// Events from the most recent frame (for HUD updates)
    last_events: Vec<GameEvent>,
}

impl<S: ProgressStore> Session<S> {
    /// Start a round, reading the stored high score once
    pub fn new(store: S, viewport: Viewport, seed: u64, tuning: Tuning) -> Self {
        let high_score = store.load_high_score();
        log::info!("Loaded high score: {}", high_score);
        Self {
            state: GameState::new(viewport, seed, tuning).with_high_score(high_score),
            store,
            last_events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    /// Run one tick and persist whatever it changed
    pub fn frame(&mut self, input: &TickInput) -> FrameOutcome {
        self.last_events = tick(&mut self.state, input);

        for event in &self.last_events {
            let saved = match *event {
                GameEvent::LevelUp { level } => self.store.save_level(level),
                GameEvent::NewHighScore { score } => {
                    log::info!("New high score: {}", score);
                    self.store.save_high_score(score)
                }
                GameEvent::Scored { .. } | GameEvent::GameOver { .. } => Ok(()),
            };
            if let Err(e) = saved {
                log::warn!("{}", e);
            }
        }

        if self.state.is_game_over() {
            FrameOutcome::Stopped
        } else {
            FrameOutcome::Continue
        }
    }

    /// Start a new round. Only acts after game over; returns whether it did.
    pub fn restart(&mut self, seed: u64) -> bool {
        if !self.state.is_game_over() {
            return false;
        }
        self.state.restart(seed);
        self.last_events.clear();
        log::info!("Game restarted with seed: {}", seed);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{HIGH_SCORE_KEY, LEVEL_KEY, MemoryStore};
    use crate::sim::{GamePhase, Rock};

    fn quiet_tuning() -> Tuning {
        Tuning {
            initial_spawn_chance: 0.0,
            spawn_chance_step: 0.0,
            ..Default::default()
        }
    }

    fn session(store: MemoryStore) -> Session<MemoryStore> {
        Session::new(store, Viewport::new(1000.0, 600.0), 1, quiet_tuning())
    }

    /// Drop a rock right on top of the player
    fn crash(session: &mut Session<MemoryStore>) -> FrameOutcome {
        let pos = session.state.player.pos;
        session
            .state
            .rocks
            .push(Rock::new(pos.x, pos.y - 10.0, 20.0, 4.0));
        session.frame(&TickInput::default())
    }

    #[test]
    fn test_loads_high_score_at_startup() {
        let session = session(MemoryStore::with_high_score(10));
        assert_eq!(session.state().high_score, 10);
    }

    #[test]
    fn test_restart_after_game_over_persists_high_score() {
        let mut session = session(MemoryStore::with_high_score(10));
        session.state.score = 37;
        session.state.level = 2;

        assert_eq!(crash(&mut session), FrameOutcome::Stopped);
        assert_eq!(session.state().high_score, 37);
        assert_eq!(session.store().get(HIGH_SCORE_KEY), Some("37"));

        assert!(session.restart(2));
        let state = session.state();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert!(state.rocks.is_empty());
        assert_eq!(state.high_score, 37);
    }

    #[test]
    fn test_lower_score_keeps_stored_high_score() {
        let mut session = session(MemoryStore::with_high_score(50));
        session.state.score = 12;
        crash(&mut session);
        assert_eq!(session.store().get(HIGH_SCORE_KEY), Some("50"));
        assert_eq!(session.state().high_score, 50);
    }

    #[test]
    fn test_restart_is_noop_while_running() {
        let mut session = session(MemoryStore::new());
        session.state.score = 5;
        assert!(!session.restart(2));
        assert_eq!(session.state().score, 5);
    }

    #[test]
    fn test_level_up_is_persisted() {
        let mut session = session(MemoryStore::new());
        session.state.score = 19;
        session.state.rocks.push(Rock::new(50.0, 562.0, 20.0, 4.0));

        assert_eq!(session.frame(&TickInput::default()), FrameOutcome::Continue);
        assert_eq!(session.state().level, 2);
        assert_eq!(session.store().get(LEVEL_KEY), Some("2"));
        assert_eq!(
            session.last_events(),
            &[GameEvent::Scored { score: 20 }, GameEvent::LevelUp { level: 2 }]
        );
    }

    #[test]
    fn test_high_score_is_max_across_rounds() {
        let mut session = session(MemoryStore::new());
        for (round, score) in [12, 40, 7, 33].into_iter().enumerate() {
            session.state.score = score;
            crash(&mut session);
            session.restart(round as u64);
        }
        assert_eq!(session.state().high_score, 40);
        assert_eq!(session.store().load_high_score(), 40);
    }
}
