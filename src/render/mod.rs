//! Read-only frame description
//!
//! The presentation gateway: projects the simulation state into a flat list
//! of primitives in playfield coordinates. The host decides how to rasterize
//! them (the shipped binary draws terminal cells). Nothing here feeds back
//! into the simulation.

use crate::consts::*;
use crate::sim::{GameMode, GameState, Rect};

/// Palette role for a primitive; the host maps these to actual colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Pipe,
    PipeRim,
    Ground,
    GroundTile,
    Bird,
    Text,
}

/// One drawable element, in playfield pixels (y grows downward)
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect { rect: Rect, shade: Shade },
    Circle { cx: f32, cy: f32, r: f32, shade: Shade },
    /// Text anchored at its horizontal center
    Text { x: f32, y: f32, text: String, shade: Shade },
}

/// Build the frame for the current state: world first, HUD on top
pub fn build_frame(state: &GameState) -> Vec<Primitive> {
    let mut frame = Vec::new();
    push_pipes(state, &mut frame);
    push_ground(state, &mut frame);
    push_bird(state, &mut frame);
    push_hud(state, &mut frame);
    frame
}

fn push_pipes(state: &GameState, frame: &mut Vec<Primitive>) {
    for pipe in &state.pipes {
        let top_h = pipe.gap_top();
        if top_h > 0.0 {
            frame.push(Primitive::Rect {
                rect: Rect::new(pipe.x, 0.0, PIPE_WIDTH, top_h),
                shade: Shade::Pipe,
            });
            frame.push(Primitive::Rect {
                rect: Rect::new(pipe.x, top_h - 8.0, PIPE_WIDTH, 8.0),
                shade: Shade::PipeRim,
            });
        }
        let bottom_y = pipe.gap_bottom();
        let bottom_h = GROUND_TOP - bottom_y;
        if bottom_h > 0.0 {
            frame.push(Primitive::Rect {
                rect: Rect::new(pipe.x, bottom_y, PIPE_WIDTH, bottom_h),
                shade: Shade::Pipe,
            });
            frame.push(Primitive::Rect {
                rect: Rect::new(pipe.x, bottom_y, PIPE_WIDTH, 8.0),
                shade: Shade::PipeRim,
            });
        }
    }
}

fn push_ground(state: &GameState, frame: &mut Vec<Primitive>) {
    frame.push(Primitive::Rect {
        rect: Rect::ground(),
        shade: Shade::Ground,
    });
    // Scrolling tile pattern on top of the strip
    let tiles = (WIDTH / GROUND_TILE) as i32 + 3;
    for i in -1..tiles {
        let x = state.ground_offset + i as f32 * GROUND_TILE;
        frame.push(Primitive::Rect {
            rect: Rect::new(x, GROUND_TOP + 40.0, GROUND_TILE - 4.0, 10.0),
            shade: Shade::GroundTile,
        });
    }
}

fn push_bird(state: &GameState, frame: &mut Vec<Primitive>) {
    frame.push(Primitive::Circle {
        cx: state.bird.pos.x,
        cy: state.bird.pos.y,
        r: BIRD_RADIUS,
        shade: Shade::Bird,
    });
}

fn push_hud(state: &GameState, frame: &mut Vec<Primitive>) {
    let center = WIDTH / 2.0;
    let mid = HEIGHT / 2.0;
    match state.mode {
        GameMode::Menu => {
            text(frame, center, mid - 90.0, "GAPWING");
            text(frame, center, mid, &format!("Best: {}", state.best_score));
            // Blink at 2 Hz
            if (state.menu_blink_timer * 2.0) as u32 % 2 == 0 {
                text(frame, center, mid + 40.0, "Space to play");
            }
        }
        GameMode::Playing => {
            text(frame, center, 32.0, &state.score.to_string());
        }
        GameMode::Paused => {
            text(frame, center, 32.0, &state.score.to_string());
            text(frame, center, mid, "PAUSED");
            text(frame, center, mid + 24.0, "P to resume");
        }
        GameMode::GameOver => {
            text(frame, center, 32.0, &state.score.to_string());
            text(frame, center, 64.0, &format!("Best: {}", state.best_score));
            text(frame, center, mid - 20.0, "GAME OVER");
            text(frame, center, mid + 20.0, "R to restart");
            text(frame, center, mid + 40.0, "Q to quit");
        }
    }
}

fn text(frame: &mut Vec<Primitive>, x: f32, y: f32, s: &str) {
    frame.push(Primitive::Text {
        x,
        y,
        text: s.to_string(),
        shade: Shade::Text,
    });
}
