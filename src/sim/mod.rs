//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per displayed frame, velocities in pixels per tick
//! - No rendering or windowing dependencies
//! - State mutated only through the operations on [`GameState`] and [`tick`]

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{Ball, GameState, Paddle};
pub use tick::{TickResult, tick};
