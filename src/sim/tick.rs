//! Fixed timestep simulation tick
//!
//! One call advances the whole session by a single step: intents first, then
//! physics, spawning, scoring, difficulty, collisions, cleanup.

use super::collision::{Rect, circle_intersects_rect};
use super::state::{GameEvent, GameMode, GameState, Pipe};
use crate::consts::*;

/// Input intents for a single tick
///
/// The host drains its event queue into one of these before each tick; no
/// input survives across ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Primary action: flap / confirm / start
    pub primary: bool,
    /// Pause toggle
    pub pause: bool,
    /// Restart the current attempt
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
///
/// `dt` is wall-clock seconds for this step and only feeds the spawn timer
/// and cosmetic animation clocks; physics is strictly per-tick. The host is
/// trusted to pace calls at the fixed rate but a negative delta is clamped.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = dt.max(0.0);
    state.events.clear();

    match state.mode {
        GameMode::Menu => {
            state.time_ticks += 1;
            state.menu_blink_timer += dt;
            float_on_menu(state);
            scroll_ground(state);
            if input.primary {
                state.start_run();
            }
        }

        GameMode::Playing => {
            if input.pause {
                state.mode = GameMode::Paused;
                return;
            }
            if input.restart {
                state.reset_session();
                return;
            }

            state.time_ticks += 1;

            if input.primary {
                state.bird.flap();
                state.events.push(GameEvent::Flapped);
            }
            state.bird.integrate(GRAVITY);
            scroll_ground(state);

            state.spawn_timer += dt;
            if state.spawn_timer >= PIPE_SPAWN_INTERVAL {
                state.spawn_timer = 0.0;
                let pipe = Pipe::spawn(&mut state.rng, state.difficulty.gap);
                state.pipes.push(pipe);
            }

            let mut collided = false;
            for pipe in &mut state.pipes {
                pipe.advance(state.difficulty.speed);

                // Scoring: one-shot flag is the authoritative guard, the
                // x-comparison only detects the crossing
                if !pipe.passed && state.bird.pos.x > pipe.center_x() {
                    pipe.passed = true;
                    state.score += 1;
                    state.difficulty = state.difficulty.step(state.score);
                    state.events.push(GameEvent::Scored(state.score));
                }

                if pipe.intersects(state.bird.pos, BIRD_RADIUS) {
                    collided = true;
                }
            }

            if circle_intersects_rect(state.bird.pos, BIRD_RADIUS, &Rect::ground()) {
                collided = true;
            }

            // Cleanup strictly after the scoring/collision pass
            state.pipes.retain(|p| !p.is_expired());

            if collided {
                state.end_run();
            }
        }

        GameMode::Paused => {
            // Frozen clock: no mutation at all besides the resume transition
            if input.pause {
                state.mode = GameMode::Playing;
            }
        }

        GameMode::GameOver => {
            state.time_ticks += 1;
            scroll_ground(state);
            // The primary action doubles as restart here
            if input.restart || input.primary {
                state.start_run();
            }
        }
    }
}

/// Cosmetic sinusoidal bobbing on the menu; not physically simulated
fn float_on_menu(state: &mut GameState) {
    let t = state.time_ticks as f32 * SIM_DT;
    state.bird.vel_y = (t * 2.0).sin() * 0.5;
    state.bird.pos.y = HEIGHT * 0.5 + (t / 0.6).sin() * 10.0;
}

/// Advance the ground scroll offset, wrapping at one tile width
fn scroll_ground(state: &mut GameState) {
    state.ground_offset -= state.difficulty.speed;
    if state.ground_offset <= -GROUND_TILE {
        state.ground_offset += GROUND_TILE;
    }
}
