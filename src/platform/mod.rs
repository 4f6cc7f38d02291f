//! Platform layer
//!
//! Handles native window/event loop glue for:
//! - Window and wgpu surface creation
//! - Keyboard / close events → [`InputEvent`]s
//! - Tick pacing via `ControlFlow::WaitUntil`
//!
//! Also hosts the windowless run used for smoke testing.

use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::assets::Assets;
use crate::error::{AppError, RenderError};
use crate::game_loop::{FramePacer, GameLoop, LoopState};
use crate::input::{EventQueue, InputEvent, ScriptedInput};
use crate::renderer::{HeadlessRenderer, RenderState};

/// Keyboard bindings
pub fn map_key(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Space => Some(InputEvent::Flap),
        KeyCode::KeyA => Some(InputEvent::ToggleAutopilot),
        KeyCode::Escape => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Windowed application driving a [`GameLoop`]
pub struct App {
    game: GameLoop,
    assets: Assets,
    input: EventQueue,
    pacer: FramePacer,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// First fatal error; reported once the event loop returns
    error: Option<AppError>,
}

impl App {
    pub fn new(game: GameLoop, assets: Assets) -> Self {
        let pacer = FramePacer::new(game.settings().tick_rate_hz);
        Self {
            game,
            assets,
            input: EventQueue::new(),
            pacer,
            window: None,
            render_state: None,
            error: None,
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let settings = self.game.settings();
        let window_attrs = Window::default_attributes()
            .with_title(settings.window_title.clone())
            .with_inner_size(PhysicalSize::new(
                settings.screen_width,
                settings.screen_height,
            ))
            .with_resizable(false);
        let screen = Vec2::new(settings.screen_width as f32, settings.screen_height as f32);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(AppError::CreateWindow)?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .map_err(RenderError::from)?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(RenderError::from)?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let inner = window.inner_size();
        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            (inner.width, inner.height),
            screen,
            &self.assets,
        ))?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.pacer = FramePacer::new(self.game.settings().tick_rate_hz);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    /// Run one game tick if its slot has come up
    fn tick_if_due(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };

        let now = Instant::now();
        if !self.pacer.remaining(now).is_zero() {
            return;
        }
        self.pacer.advance(now);

        match self.game.step(render_state, &mut self.input) {
            Ok(LoopState::Running) => {}
            Ok(LoopState::Stopped) => event_loop.exit(),
            Err(e) => self.fail(event_loop, e.into()),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.initialize(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            // Quit goes through the input queue so the current tick finishes
            WindowEvent::CloseRequested => {
                log::info!("Window close requested");
                self.input.push(InputEvent::Quit);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(new_size.width, new_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        if let Some(input) = map_key(code) {
                            self.input.push(input);
                        }
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.tick_if_due(event_loop);
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
    }
}

/// Open the window and play until quit
pub fn run(game: GameLoop, assets: Assets) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(game, assets);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Run `ticks` ticks without a window or input, then stop.
///
/// The loop always completes the tick that observes the quit, so `0` still runs one.
pub fn run_headless(mut game: GameLoop, ticks: u64) -> Result<u64, AppError> {
    let mut renderer = HeadlessRenderer::new(u64::from(game.settings().tick_rate_hz));
    let idle = usize::try_from(ticks.saturating_sub(1)).unwrap_or(usize::MAX);
    let mut input = ScriptedInput::idle_for(idle);
    let ran = game.run(&mut renderer, &mut input)?;
    let bird = game.state().bird;
    log::info!(
        "Headless run finished: {} ticks, {} frames, seed {}, bird y={:.1} v={:.1}",
        ran,
        renderer.frames,
        game.seed(),
        bird.y,
        bird.velocity
    );
    Ok(ran)
}
