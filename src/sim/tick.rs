//! Per-frame simulation tick
//!
//! Advances rocks, scores them, checks for collisions and spawns new ones.
//! Runs once per animation frame; the step size is fixed in rock speeds.

use super::collision::rock_hits_player;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::ELAPSED_STEP;

/// Input sampled for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer x (moves the player directly)
    pub pointer_x: Option<f32>,
    /// Accumulated touch drag since the last tick
    pub drag_dx: f32,
    /// Left direction held
    pub left: bool,
    /// Right direction held
    pub right: bool,
}

/// Apply an input snapshot to the player and clamp to the playable range
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;

    if let Some(x) = input.pointer_x {
        player.pos.x = x;
    }
    player.pos.x += input.drag_dx;

    let key_speed = state.tuning.key_speed;
    if input.left {
        player.pos.x -= key_speed;
    }
    if input.right {
        player.pos.x += key_speed;
    }

    player.clamp_x(&state.viewport);
}

/// Advance the game by one frame.
///
/// Returns the events that happened, in order. Does nothing once the round
/// is over; only [`GameState::restart`] leaves `GameOver`.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    apply_input(state, input);
    state.elapsed += ELAPSED_STEP;

    let scoring_line = state.player.scoring_line();
    for i in 0..state.rocks.len() {
        let rock = &mut state.rocks[i];
        rock.pos.y += rock.speed;

        if !rock.scored && rock.pos.y > scoring_line {
            rock.scored = true;
            state.score += 1;
            events.push(GameEvent::Scored { score: state.score });

            if state.tuning.is_level_up(state.score) {
                state.level += 1;
                state.spawn_chance = state.tuning.next_spawn_chance(state.spawn_chance);
                log::info!(
                    "Level up: {} (spawn chance {:.2})",
                    state.level,
                    state.spawn_chance
                );
                events.push(GameEvent::LevelUp { level: state.level });
            }
        }

        if rock_hits_player(&state.player, &state.rocks[i]) {
            end_round(state, &mut events);
            return events;
        }
    }

    let height = state.viewport.height;
    state.rocks.retain(|r| r.pos.y <= height);

    if state.roll_spawn() {
        state.spawn_rock();
    }

    events
}

fn end_round(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    log::info!("Game over with score {}", state.score);

    if state.score > state.high_score {
        state.high_score = state.score;
        events.push(GameEvent::NewHighScore { score: state.score });
    }
    events.push(GameEvent::GameOver { score: state.score });
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::sim::state::Viewport;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (
            proptest::option::of(-5000.0f32..5000.0),
            -5000.0f32..5000.0,
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(pointer_x, drag_dx, left, right)| TickInput {
                pointer_x,
                drag_dx,
                left,
                right,
            })
    }

    proptest! {
        #[test]
        fn player_stays_in_bounds(
            seed in any::<u64>(),
            inputs in proptest::collection::vec(arb_input(), 1..200),
        ) {
            let mut state = GameState::new(Viewport::new(800.0, 600.0), seed, Tuning::default());
            for input in &inputs {
                tick(&mut state, input);
                let half = state.player.size / 2.0;
                prop_assert!(state.player.pos.x >= half);
                prop_assert!(state.player.pos.x <= 800.0 - half);
            }
        }

        #[test]
        fn score_counts_scored_flips(seed in any::<u64>(), ticks in 1usize..1500) {
            let mut state = GameState::new(Viewport::new(800.0, 600.0), seed, Tuning::default());
            let mut last_score = 0;
            let mut scored_events = 0;
            let mut level_ups = 0;
            for _ in 0..ticks {
                let events = tick(&mut state, &TickInput::default());

                // Scored exactly when past the scoring line
                if !state.is_game_over() {
                    let line = state.player.scoring_line();
                    for rock in &state.rocks {
                        prop_assert_eq!(rock.scored, rock.pos.y > line);
                    }
                }
                prop_assert!(state.score >= last_score);
                last_score = state.score;

                for event in &events {
                    match event {
                        GameEvent::Scored { .. } => scored_events += 1,
                        GameEvent::LevelUp { .. } => level_ups += 1,
                        _ => {}
                    }
                }
                if state.is_game_over() {
                    break;
                }
            }
            prop_assert_eq!(state.score, scored_events);
            prop_assert_eq!(state.level, 1 + level_ups);
            prop_assert_eq!(state.level, 1 + state.score / 20);
        }
    }
}
