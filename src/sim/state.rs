//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{Rect, circle_intersects_rect};
use super::difficulty::Difficulty;
use crate::consts::*;

/// Current mode of the session. Exactly one is active at a time; nothing in
/// the simulation mutates outside a `tick` dispatching on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Title screen, bird floating cosmetically
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen clock, nothing moves
    Paused,
    /// Run ended, world frozen except the scrolling ground
    GameOver,
}

/// Things that happened during the last tick, for the host to react to
/// (exactly-once persistence trigger, sound cues). Cleared at the start of
/// every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flapped,
    /// A pipe was cleared; carries the new score
    Scored(u32),
    /// The bird hit a pipe or the ground
    Crashed,
    /// The run beat the stored best score; carries the new best
    NewBest(u32),
}

/// The player-controlled bird
///
/// Horizontal position is fixed at `BIRD_X`; only `y` and the vertical
/// velocity are simulated.
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    pub pos: Vec2,
    /// Vertical velocity in px/tick. Clamped to at most `MAX_FALL_SPEED`
    /// after integration; upward speed is unbounded beyond the flap impulse.
    pub vel_y: f32,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, HEIGHT * 0.5),
            vel_y: 0.0,
        }
    }

    /// One step of gravity integration: accelerate, clamp, move
    pub fn integrate(&mut self, gravity: f32) {
        self.vel_y = (self.vel_y + gravity).min(MAX_FALL_SPEED);
        self.pos.y += self.vel_y;
    }

    /// Apply the flap impulse, overwriting any current velocity
    pub fn flap(&mut self) {
        self.vel_y = FLAP_VELOCITY;
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A pipe pair: two rectangles with a vertical gap between them
#[derive(Debug, Clone, Copy)]
pub struct Pipe {
    /// Left edge; decreases as the world scrolls
    pub x: f32,
    /// Vertical center of the gap
    pub gap_center: f32,
    /// Gap height, fixed at spawn from the difficulty state
    pub gap_height: f32,
    /// One-shot scoring guard; set once when the bird clears the center
    pub passed: bool,
}

impl Pipe {
    /// Spawn a pipe at the right screen edge with a uniformly random gap
    /// center that keeps `SAFE_MARGIN_TOP`/`SAFE_MARGIN_BOTTOM` clearance.
    /// Falls back to the playable-area midpoint when the gap is too large
    /// for the margins.
    pub fn spawn(rng: &mut Pcg32, gap_height: f32) -> Self {
        let min_y = SAFE_MARGIN_TOP + gap_height / 2.0;
        let max_y = GROUND_TOP - SAFE_MARGIN_BOTTOM - gap_height / 2.0;
        let gap_center = if max_y > min_y {
            rng.random_range(min_y..=max_y)
        } else {
            GROUND_TOP / 2.0
        };
        Self {
            x: WIDTH,
            gap_center,
            gap_height,
            passed: false,
        }
    }

    /// Scroll left by the current pipe speed
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// True once the right edge has scrolled past the left screen edge
    pub fn is_expired(&self) -> bool {
        self.x + PIPE_WIDTH < 0.0
    }

    /// Horizontal center, used for the scoring crossing test
    pub fn center_x(&self) -> f32 {
        self.x + PIPE_WIDTH / 2.0
    }

    /// Top edge of the gap (bottom of the upper pipe)
    pub fn gap_top(&self) -> f32 {
        self.gap_center - self.gap_height / 2.0
    }

    /// Bottom edge of the gap (top of the lower pipe)
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center + self.gap_height / 2.0
    }

    /// Check the bird circle against both solid halves of the pipe.
    /// Halves with non-positive height are skipped so a gap spanning the
    /// whole playable range can never produce a false hit.
    pub fn intersects(&self, center: Vec2, radius: f32) -> bool {
        let top_h = self.gap_top();
        if top_h > 0.0 {
            let top = Rect::new(self.x, 0.0, PIPE_WIDTH, top_h);
            if circle_intersects_rect(center, radius, &top) {
                return true;
            }
        }
        let bottom_y = self.gap_bottom();
        let bottom_h = GROUND_TOP - bottom_y;
        if bottom_h > 0.0 {
            let bottom = Rect::new(self.x, bottom_y, PIPE_WIDTH, bottom_h);
            if circle_intersects_rect(center, radius, &bottom) {
                return true;
            }
        }
        false
    }
}

/// Complete game state, owned and mutated exclusively by [`super::tick`]
#[derive(Debug, Clone)]
pub struct GameState {
    pub mode: GameMode,
    pub bird: Bird,
    /// Insertion order = spawn order = left-to-right screen order
    pub pipes: Vec<Pipe>,
    pub difficulty: Difficulty,
    /// Points this run; +1 per pipe cleared
    pub score: u32,
    /// Highest score across sessions (loaded at startup, bumped on crash)
    pub best_score: u32,
    /// Seconds accumulated toward the next pipe spawn
    pub spawn_timer: f32,
    /// Cosmetic ground scroll offset, wraps at `GROUND_TILE`
    pub ground_offset: f32,
    /// Seconds accumulated on the menu, drives the blinking prompt
    pub menu_blink_timer: f32,
    /// Simulation tick counter (drives the menu float animation)
    pub time_ticks: u64,
    /// Seeded RNG for gap sampling
    pub rng: Pcg32,
    /// Events published by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh state on the menu screen
    pub fn new(seed: u64, best_score: u32) -> Self {
        Self {
            mode: GameMode::Menu,
            bird: Bird::new(),
            pipes: Vec::new(),
            difficulty: Difficulty::default(),
            score: 0,
            best_score,
            spawn_timer: 0.0,
            ground_offset: 0.0,
            menu_blink_timer: 0.0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Reset everything belonging to one attempt. Mode and best score are
    /// untouched; the RNG keeps its stream so replays differ between runs.
    pub fn reset_session(&mut self) {
        self.bird = Bird::new();
        self.pipes.clear();
        self.difficulty = Difficulty::default();
        self.score = 0;
        self.spawn_timer = 0.0;
        self.ground_offset = 0.0;
    }

    /// Begin a new attempt from the menu or the game-over screen
    pub fn start_run(&mut self) {
        self.reset_session();
        self.mode = GameMode::Playing;
    }

    /// Terminal collision: freeze the world and settle the best score
    pub fn end_run(&mut self) {
        self.mode = GameMode::GameOver;
        self.events.push(GameEvent::Crashed);
        if self.score > self.best_score {
            self.best_score = self.score;
            self.events.push(GameEvent::NewBest(self.best_score));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integrate_applies_gravity() {
        // Scenario from the reference tuning: at rest, one step of 0.35
        let mut bird = Bird::new();
        bird.pos.y = 256.0;
        bird.integrate(GRAVITY);
        assert_eq!(bird.vel_y, GRAVITY);
        assert!((bird.pos.y - (256.0 + GRAVITY)).abs() < 1e-5);
    }

    #[test]
    fn test_flap_overwrites_velocity() {
        let mut bird = Bird::new();
        bird.vel_y = MAX_FALL_SPEED;
        bird.flap();
        assert_eq!(bird.vel_y, FLAP_VELOCITY);

        // No stacking: flapping while rising just resets the impulse
        bird.flap();
        assert_eq!(bird.vel_y, FLAP_VELOCITY);
    }

    #[test]
    fn test_pipe_expiry() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut pipe = Pipe::spawn(&mut rng, GAP_START);
        assert!(!pipe.is_expired());
        pipe.x = -PIPE_WIDTH + 0.1;
        assert!(!pipe.is_expired());
        pipe.advance(0.2);
        assert!(pipe.is_expired());
    }

    #[test]
    fn test_pipe_intersects_gap_is_safe() {
        let mut rng = Pcg32::seed_from_u64(7);
        let pipe = Pipe::spawn(&mut rng, GAP_START);
        // Dead center of the gap: clear by construction (gap > 2*radius)
        let center = Vec2::new(pipe.center_x(), pipe.gap_center);
        assert!(!pipe.intersects(center, BIRD_RADIUS));
        // Above the gap: inside the top half
        let above = Vec2::new(pipe.center_x(), pipe.gap_top() - BIRD_RADIUS);
        assert!(pipe.intersects(above, BIRD_RADIUS));
        // Below the gap: inside the bottom half
        let below = Vec2::new(pipe.center_x(), pipe.gap_bottom() + BIRD_RADIUS);
        assert!(pipe.intersects(below, BIRD_RADIUS));
    }

    #[test]
    fn test_full_height_gap_never_collides() {
        let pipe = Pipe {
            x: BIRD_X - PIPE_WIDTH / 2.0,
            gap_center: GROUND_TOP / 2.0,
            gap_height: 2.0 * HEIGHT, // both halves have non-positive height
            passed: false,
        };
        assert!(!pipe.intersects(Vec2::new(BIRD_X, 100.0), BIRD_RADIUS));
    }

    #[test]
    fn test_reset_session_keeps_best() {
        let mut state = GameState::new(1, 42);
        state.score = 7;
        state.pipes.push(Pipe::spawn(&mut Pcg32::seed_from_u64(2), GAP_START));
        state.difficulty = state.difficulty.step(10);
        state.reset_session();
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.difficulty, Difficulty::default());
        assert_eq!(state.best_score, 42);
    }

    #[test]
    fn test_end_run_updates_best_once() {
        let mut state = GameState::new(1, 5);
        state.mode = GameMode::Playing;
        state.score = 9;
        state.end_run();
        assert_eq!(state.mode, GameMode::GameOver);
        assert_eq!(state.best_score, 9);
        assert!(state.events.contains(&GameEvent::NewBest(9)));

        // A lower run later does not touch the record
        state.events.clear();
        state.score = 3;
        state.end_run();
        assert_eq!(state.best_score, 9);
        assert!(!state.events.iter().any(|e| matches!(e, GameEvent::NewBest(_))));
    }

    proptest! {
        /// Integration never leaves the velocity above the fall-speed cap
        #[test]
        fn prop_velocity_clamped(v0 in -500.0f32..500.0, steps in 1usize..200) {
            let mut bird = Bird::new();
            bird.vel_y = v0;
            for _ in 0..steps {
                bird.integrate(GRAVITY);
                prop_assert!(bird.vel_y <= MAX_FALL_SPEED);
            }
        }

        /// Every sampled gap center leaves the required safe margins
        #[test]
        fn prop_spawn_respects_margins(seed in any::<u64>(), gap in GAP_MIN..=GAP_START) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let pipe = Pipe::spawn(&mut rng, gap);
            // f32 tolerance: center - gap/2 can round a hair past the bound
            prop_assert!(pipe.gap_top() >= SAFE_MARGIN_TOP - 1e-3);
            prop_assert!(pipe.gap_bottom() <= GROUND_TOP - SAFE_MARGIN_BOTTOM + 1e-3);
        }

        /// Oversized gaps fall back to the playable-area midpoint
        #[test]
        fn prop_spawn_fallback_midpoint(seed in any::<u64>()) {
            let huge = GROUND_TOP - SAFE_MARGIN_TOP - SAFE_MARGIN_BOTTOM + 1.0;
            let mut rng = Pcg32::seed_from_u64(seed);
            let pipe = Pipe::spawn(&mut rng, huge);
            prop_assert_eq!(pipe.gap_center, GROUND_TOP / 2.0);
        }
    }
}
