//! Discrete input events
//!
//! The loop drains its input source once per tick. Sources never block.

use std::collections::VecDeque;

/// Something the player did since the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Stop the loop after this tick
    Quit,
    /// Reset the bird's velocity to the flap impulse
    Flap,
    /// Flip the autopilot on or off
    ToggleAutopilot,
}

/// Yields the events queued since the previous call
pub trait InputSource {
    fn drain(&mut self) -> Vec<InputEvent>;
}

/// FIFO filled by the platform's event handler
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for EventQueue {
    fn drain(&mut self) -> Vec<InputEvent> {
        self.events.drain(..).collect()
    }
}

/// Replays a fixed script, one entry per tick, then stays silent
/// (or quits, see [`ScriptedInput::then_quit`]).
#[derive(Debug, Default)]
pub struct ScriptedInput {
    ticks: VecDeque<Vec<InputEvent>>,
    quit_when_done: bool,
}

impl ScriptedInput {
    pub fn new(ticks: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            ticks: ticks.into_iter().collect(),
            quit_when_done: false,
        }
    }

    /// No events for `ticks` ticks, then quit
    pub fn idle_for(ticks: usize) -> Self {
        Self::new(std::iter::repeat_n(Vec::new(), ticks)).then_quit()
    }

    /// Emit `Quit` once the script is exhausted
    pub fn then_quit(mut self) -> Self {
        self.quit_when_done = true;
        self
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self) -> Vec<InputEvent> {
        match self.ticks.pop_front() {
            Some(events) => events,
            None if self.quit_when_done => vec![InputEvent::Quit],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue_drains_in_order() {
        let mut queue = EventQueue::new();
        queue.push(InputEvent::Flap);
        queue.push(InputEvent::Quit);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.drain(), vec![InputEvent::Flap, InputEvent::Quit]);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_scripted_input_per_tick() {
        let mut input = ScriptedInput::new(vec![vec![], vec![InputEvent::Flap]]);
        assert!(input.drain().is_empty());
        assert_eq!(input.drain(), vec![InputEvent::Flap]);
        assert!(input.drain().is_empty());
        assert!(input.drain().is_empty());
    }

    #[test]
    fn test_idle_then_quit() {
        let mut input = ScriptedInput::idle_for(2);
        assert!(input.drain().is_empty());
        assert!(input.drain().is_empty());
        assert_eq!(input.drain(), vec![InputEvent::Quit]);
    }
}
