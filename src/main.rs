//! Gapwing entry point
//!
//! Thin terminal host around the simulation: maps key presses to logical
//! actions, paces a fixed 60 Hz tick with a bounded accumulator, rasterizes
//! the frame description into terminal cells, and persists the best score.

use std::io::{self, Write, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};

use gapwing::consts::*;
use gapwing::persistence;
use gapwing::render::{self, Primitive, Shade};
use gapwing::sim::{GameEvent, GameState, TickInput, tick};

/// Terminal grid the playfield is rasterized onto
const COLS: usize = 72;
const ROWS: usize = 48;
const CELL_W: f32 = WIDTH / COLS as f32;
const CELL_H: f32 = HEIGHT / ROWS as f32;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("host error: {err}");
    }
    // No failure exit code exists in this design
}

fn run() -> io::Result<()> {
    let save_path = persistence::default_path();
    let best = persistence::load_best(&save_path);

    let seed = std::time::UNIX_EPOCH
        .elapsed()
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed, best);
    log::info!("starting with seed {seed}, best {best}");

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run_loop(&mut out, &mut state, &save_path);

    // Always restore the terminal, then save on the way out
    let _ = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    if let Err(err) = persistence::save_best(&save_path, state.best_score) {
        log::warn!("could not save best score: {err}");
    }
    result
}

fn run_loop(
    out: &mut io::Stdout,
    state: &mut GameState,
    save_path: &std::path::Path,
) -> io::Result<()> {
    let frame_interval = Duration::from_secs_f32(SIM_DT);
    let mut last = Instant::now();
    let mut accumulator = 0.0f32;
    let mut input = TickInput::default();

    loop {
        // Drain input up to the next frame deadline; intents are one-shot
        // and consumed by the next tick
        let deadline = last + frame_interval;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            if !event::poll(deadline - now)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    _ if ctrl_c => return Ok(()),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => input.primary = true,
                    KeyCode::Char('p') => input.pause = true,
                    KeyCode::Char('r') => input.restart = true,
                    _ => {}
                }
            }
        }

        let now = Instant::now();
        // Bound runaway deltas (stalled terminal, suspended process) so one
        // frame can never skip past spawns or collisions
        let dt = (now - last).as_secs_f32().min(0.1);
        last = now;
        accumulator += dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, &input, SIM_DT);
            input = TickInput::default();
            for event in &state.events {
                if let GameEvent::NewBest(best) = event {
                    if let Err(err) = persistence::save_best(save_path, *best) {
                        log::warn!("could not save best score: {err}");
                    }
                }
            }
            accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop backlog the substep budget did not cover
        accumulator = accumulator.min(SIM_DT);

        draw(out, state)?;
    }
}

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const SKY_CELL: Cell = Cell {
    ch: ' ',
    color: Color::Reset,
};

fn style_of(shade: Shade) -> Cell {
    match shade {
        Shade::Pipe => Cell {
            ch: '█',
            color: Color::Green,
        },
        Shade::PipeRim => Cell {
            ch: '▓',
            color: Color::DarkGreen,
        },
        Shade::Ground => Cell {
            ch: '▒',
            color: Color::DarkYellow,
        },
        Shade::GroundTile => Cell {
            ch: '░',
            color: Color::Yellow,
        },
        Shade::Bird => Cell {
            ch: '●',
            color: Color::Yellow,
        },
        Shade::Text => Cell {
            ch: ' ',
            color: Color::White,
        },
    }
}

/// Rasterize the frame description into the cell grid and flush it
fn draw(out: &mut io::Stdout, state: &GameState) -> io::Result<()> {
    let mut grid = vec![SKY_CELL; COLS * ROWS];

    for primitive in render::build_frame(state) {
        match primitive {
            Primitive::Rect { rect, shade } => {
                let style = style_of(shade);
                let c0 = (rect.x / CELL_W).floor().max(0.0) as usize;
                let c1 = (((rect.x + rect.w) / CELL_W).ceil() as isize).clamp(0, COLS as isize);
                let r0 = (rect.y / CELL_H).floor().max(0.0) as usize;
                let r1 = (((rect.y + rect.h) / CELL_H).ceil() as isize).clamp(0, ROWS as isize);
                for row in r0..r1 as usize {
                    for col in c0..c1 as usize {
                        grid[row * COLS + col] = style;
                    }
                }
            }
            Primitive::Circle { cx, cy, r, shade } => {
                let style = style_of(shade);
                let c0 = (((cx - r) / CELL_W).floor() as isize).max(0);
                let c1 = (((cx + r) / CELL_W).ceil() as isize).clamp(0, COLS as isize);
                let r0 = (((cy - r) / CELL_H).floor() as isize).max(0);
                let r1 = (((cy + r) / CELL_H).ceil() as isize).clamp(0, ROWS as isize);
                for row in r0..r1 {
                    for col in c0..c1 {
                        let px = (col as f32 + 0.5) * CELL_W;
                        let py = (row as f32 + 0.5) * CELL_H;
                        let dx = px - cx;
                        let dy = py - cy;
                        if dx * dx + dy * dy <= r * r {
                            grid[row as usize * COLS + col as usize] = style;
                        }
                    }
                }
            }
            Primitive::Text { x, y, text, shade } => {
                let color = style_of(shade).color;
                let row = ((y / CELL_H) as isize).clamp(0, ROWS as isize - 1) as usize;
                let start = (x / CELL_W) as isize - text.chars().count() as isize / 2;
                for (i, ch) in text.chars().enumerate() {
                    let col = start + i as isize;
                    if (0..COLS as isize).contains(&col) {
                        grid[row * COLS + col as usize] = Cell { ch, color };
                    }
                }
            }
        }
    }

    let mut current = Color::Reset;
    for row in 0..ROWS {
        queue!(out, cursor::MoveTo(0, row as u16))?;
        for col in 0..COLS {
            let cell = grid[row * COLS + col];
            if cell.color != current {
                queue!(out, SetForegroundColor(cell.color))?;
                current = cell.color;
            }
            queue!(out, Print(cell.ch))?;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()
}
