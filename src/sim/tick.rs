//! Fixed timestep simulation
//!
//! `advance_state` is the physics half of a tick, `apply_input` the input half.
//! The loop calls them in that order, after rendering.

use super::state::GameState;
use crate::consts::*;
use crate::input::InputEvent;
use crate::settings::Settings;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap key pressed at least once this tick
    pub flap: bool,
    /// Quit requested (window close / escape)
    pub quit: bool,
    /// Autopilot toggle pressed an odd number of times this tick
    pub toggle_autopilot: bool,
}

impl TickInput {
    /// Fold the events drained for one tick
    pub fn from_events(events: &[InputEvent]) -> Self {
        let mut input = Self::default();
        for event in events {
            match event {
                InputEvent::Quit => input.quit = true,
                InputEvent::Flap => input.flap = true,
                InputEvent::ToggleAutopilot => input.toggle_autopilot = !input.toggle_autopilot,
            }
        }
        input
    }
}

/// Greedy autopilot: flap whenever the bird is below the center of the nearest gap.
///
/// Only the first pipe is considered and velocity is ignored, so the bird
/// oscillates around the gap center.
pub fn autopilot_decision(state: &GameState, gap_size: f32) -> bool {
    match state.nearest_pipe() {
        Some(pipe) => state.bird.y > pipe.gap_center(gap_size),
        None => false,
    }
}

/// Advance physics, pipes and ground scroll by one tick
pub fn advance_state(state: &mut GameState, settings: &Settings) {
    state.time_ticks += 1;

    // Bird: gravity every tick, no terminal velocity
    state.bird.fall(settings.gravity);

    // Pipes: scroll left, then drop the ones fully off the left edge
    for pipe in &mut state.pipes {
        pipe.x -= settings.pipe_speed;
    }
    state
        .pipes
        .retain(|pipe| !pipe.is_offscreen(settings.pipe_width));

    // At most one spawn per tick
    let screen_width = settings.screen_width as f32;
    let needs_pipe = match state.newest_pipe() {
        None => true,
        Some(newest) => newest.x < screen_width - PIPE_SPAWN_SPACING,
    };
    if needs_pipe {
        state.spawn_pipe(screen_width);
    }

    // Ground scroll (cosmetic)
    state.ground_offset -= settings.ground_scroll_speed;
    if state.ground_offset.abs() > GROUND_WRAP {
        state.ground_offset = 0.0;
    }
}

/// Apply this tick's input. Returns true if the bird flapped.
///
/// Manual flap first, then the autopilot; both reset velocity to the same value.
pub fn apply_input(state: &mut GameState, input: &TickInput, settings: &Settings) -> bool {
    let mut flapped = false;

    if input.flap {
        state.bird.flap(settings.flap_strength);
        flapped = true;
    }

    if input.toggle_autopilot {
        state.autopilot = !state.autopilot;
        log::info!(
            "Autopilot {}",
            if state.autopilot { "enabled" } else { "disabled" }
        );
    }

    if state.autopilot && autopilot_decision(state, settings.pipe_gap_size) {
        state.bird.flap(settings.flap_strength);
        flapped = true;
    }

    flapped
}
