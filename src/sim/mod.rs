//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host drains input into a [`TickInput`], calls [`tick`] once per fixed
//! step, then reads the state back out for presentation.

pub mod collision;
pub mod difficulty;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_intersects_rect};
pub use difficulty::Difficulty;
pub use state::{Bird, GameEvent, GameMode, GameState, Pipe};
pub use tick::{TickInput, tick};
