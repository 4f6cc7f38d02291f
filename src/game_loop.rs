//! Game loop
//!
//! One tick is: render the current state, advance physics, then drain and apply
//! input. Input therefore takes effect on the next rendered frame.

use std::thread;
use std::time::{Duration, Instant};

use crate::input::InputSource;
use crate::renderer::{Frame, RenderError, Renderer};
use crate::settings::Settings;
use crate::sim::{self, GameState, TickInput};

/// Loop lifecycle. There is no pause, win or lose state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Fixed-interval tick scheduler.
///
/// A tick that overruns its slot re-anchors the schedule instead of letting
/// the loop burst to catch up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(tick_rate_hz: u32) -> Self {
        Self::starting_at(tick_rate_hz, Instant::now())
    }

    pub fn starting_at(tick_rate_hz: u32, start: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / tick_rate_hz.max(1) as f64),
            next: start,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next tick is due
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Time left until the next tick (zero when due or overdue)
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Consume the current slot
    pub fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
    }

    /// Sleep until the next tick is due, then consume its slot
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }
}

/// Owns all game state and sequences the per-tick phases
#[derive(Debug, Clone)]
pub struct GameLoop {
    settings: Settings,
    state: GameState,
    loop_state: LoopState,
}

impl GameLoop {
    /// Create a loop seeded from settings, or from entropy when no seed is set
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        let state = GameState::new(&settings, seed);
        log::info!(
            "Starting game: {}x{} @ {} Hz, seed {}, autopilot {}",
            settings.screen_width,
            settings.screen_height,
            settings.tick_rate_hz,
            state.seed,
            if settings.autopilot_enabled { "on" } else { "off" }
        );
        Self {
            settings,
            state,
            loop_state: LoopState::Running,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Seed of the pipe RNG; replaying it reproduces the run
    pub fn seed(&self) -> u64 {
        self.state.seed
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn is_running(&self) -> bool {
        self.loop_state == LoopState::Running
    }

    pub fn autopilot(&self) -> bool {
        self.state.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.state.autopilot = enabled;
    }

    /// Append a pipe at the right edge
    pub fn spawn_pipe(&mut self) {
        self.state.spawn_pipe(self.settings.screen_width as f32);
    }

    /// Would the autopilot flap right now?
    pub fn autopilot_decision(&self) -> bool {
        sim::autopilot_decision(&self.state, self.settings.pipe_gap_size)
    }

    pub fn advance_state(&mut self) {
        sim::advance_state(&mut self.state, &self.settings);

        let ticks = self.state.time_ticks;
        if ticks % u64::from(self.settings.tick_rate_hz.max(1)) == 0 {
            log::debug!(
                "Tick {}: bird y={:.1} v={:.1}, {} pipes",
                ticks,
                self.state.bird.y,
                self.state.bird.velocity,
                self.state.pipes.len()
            );
        }
    }

    /// Drain this tick's events and apply them
    pub fn handle_input(&mut self, input: &mut impl InputSource) -> LoopState {
        let events = input.drain();
        let tick_input = TickInput::from_events(&events);

        if tick_input.quit && self.loop_state == LoopState::Running {
            log::info!("Quit requested after {} ticks", self.state.time_ticks);
            self.loop_state = LoopState::Stopped;
        }

        if sim::apply_input(&mut self.state, &tick_input, &self.settings) {
            log::trace!("Flap at tick {}", self.state.time_ticks);
        }

        self.loop_state
    }

    /// Build the frame for the current state
    pub fn frame(&self) -> Frame {
        Frame::build(&self.state, &self.settings)
    }

    /// Run one tick: render, advance, handle input
    pub fn step(
        &mut self,
        renderer: &mut impl Renderer,
        input: &mut impl InputSource,
    ) -> Result<LoopState, RenderError> {
        renderer.draw(&self.frame())?;
        self.advance_state();
        Ok(self.handle_input(input))
    }

    /// Tick at the configured rate until quit. Returns the number of ticks run.
    pub fn run(
        &mut self,
        renderer: &mut impl Renderer,
        input: &mut impl InputSource,
    ) -> Result<u64, RenderError> {
        let mut pacer = FramePacer::new(self.settings.tick_rate_hz);
        let mut ticks = 0;

        while self.is_running() {
            pacer.wait();
            self.step(renderer, input)?;
            ticks += 1;
        }

        log::info!("Game loop stopped after {} ticks", ticks);
        Ok(ticks)
    }
}
