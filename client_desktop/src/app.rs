use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use game_core::Config;
use tracing::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::ClientConfig;
use crate::font::Font;
use crate::input::Keyboard;
use crate::renderer::Renderer;
use crate::simulation::LocalGame;
use crate::timestep::FixedTimestep;

struct App {
    config: ClientConfig,
    font: Font,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    game: LocalGame,
    keyboard: Keyboard,
    timestep: FixedTimestep,
    last_frame: Option<Instant>,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: ClientConfig, font: Font) -> Self {
        let game = LocalGame::new(Config::for_ruleset(config.ruleset));
        let timestep = FixedTimestep::from_rate(config.tick_rate);
        Self {
            config,
            font,
            window: None,
            renderer: None,
            game,
            keyboard: Keyboard::new(),
            timestep,
            last_frame: None,
            error: None,
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<(Arc<Window>, Renderer)> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            self.game.map.width as f32,
            self.game.map.height as f32,
        ))
        .context("failed to initialise renderer")?;

        Ok((window, renderer))
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if let Some(last) = self.last_frame.replace(now) {
            self.timestep.accumulate((now - last).as_secs_f32());
        }

        while self.timestep.should_step() {
            self.game.tick(self.keyboard.input());
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let Some(snapshot) = self.game.snapshot() else {
            return;
        };

        match renderer.draw(&snapshot, &self.font) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow!("GPU out of memory"));
            }
            Err(err) => warn!("surface error: {err}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok((window, renderer)) => {
                info!(ruleset = %self.config.ruleset, "window ready");
                window.request_redraw();
                self.window = Some(window);
                self.renderer = Some(renderer);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape && state == ElementState::Pressed {
                    event_loop.exit();
                } else {
                    self.keyboard.handle_key(code, state);
                }
            }
            WindowEvent::Focused(false) => self.keyboard.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

/// Open the game window and run until it is closed
pub fn run(config: ClientConfig, font: Font) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, font);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => {
            info!(high_score = app.game.score.high, "window closed");
            Ok(())
        }
    }
}
