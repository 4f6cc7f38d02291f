//! Game state and core simulation types
//!
//! Everything that changes from tick to tick lives in `GameState`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::Settings;

/// The player's bird. Only the vertical axis moves; the column is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Vertical position (grows downward)
    pub y: f32,
    /// Vertical velocity (negative = up)
    pub velocity: f32,
}

impl Bird {
    pub fn new(y: f32) -> Self {
        Self { y, velocity: 0.0 }
    }

    /// Reset velocity to the flap impulse. Repeated flaps in one tick don't stack.
    pub fn flap(&mut self, flap_strength: f32) {
        self.velocity = flap_strength;
    }

    /// Accumulate gravity, then move
    pub fn fall(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.y += self.velocity;
    }
}

/// A pipe pair with a vertical gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Bottom of the top pipe; the gap spans `[gap_top, gap_top + gap_size]`
    pub gap_top: f32,
}

impl Pipe {
    pub fn gap_center(&self, gap_size: f32) -> f32 {
        self.gap_top + gap_size / 2.0
    }

    /// True once the right edge has left the screen
    pub fn is_offscreen(&self, pipe_width: f32) -> bool {
        self.x <= -pipe_width
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub bird: Bird,
    /// Sorted by `x` ascending; newest pipe last
    pub pipes: Vec<Pipe>,
    /// Cosmetic ground offset in `[-GROUND_WRAP, 0]`
    pub ground_offset: f32,
    pub autopilot: bool,
    /// Completed physics steps
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bird: Bird::new(settings.bird_start_y()),
            pipes: Vec::new(),
            ground_offset: 0.0,
            autopilot: settings.autopilot_enabled,
            time_ticks: 0,
        };

        state.spawn_pipe(settings.screen_width as f32);

        state
    }

    /// Append a pipe at the right edge with a random gap
    pub fn spawn_pipe(&mut self, screen_width: f32) {
        let gap_top = self.rng.random_range(GAP_TOP_MIN..=GAP_TOP_MAX) as f32;
        self.pipes.push(Pipe {
            x: screen_width,
            gap_top,
        });
        log::trace!("Spawned pipe gap_top={} at tick {}", gap_top, self.time_ticks);
    }

    /// The pipe the bird meets next
    pub fn nearest_pipe(&self) -> Option<&Pipe> {
        self.pipes.first()
    }

    /// The most recently spawned pipe
    pub fn newest_pipe(&self) -> Option<&Pipe> {
        self.pipes.last()
    }
}
