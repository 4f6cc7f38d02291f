//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call per tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Bird, GameState, Pipe};
pub use tick::{TickInput, advance_state, apply_input, autopilot_decision};
