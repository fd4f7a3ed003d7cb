//! Windowed presentation of a particle field.
//!
//! [`Visualization`] is the user-facing builder; `run()` opens a window and
//! drives the animation loop from the host's redraw scheduling, re-arming
//! the next frame with `request_redraw` only while the loop is live.
//!
//! Every setup failure here is absorbed and logged: a card decoration that
//! cannot render is a silent no-op, never an error for the caller.

use crate::engine::{AnimationLoop, Engine};
use crate::error::ViewerError;
use crate::random::EntropySource;
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Default surface size when the host does not specify one.
pub const DEFAULT_WIDTH: u32 = 250;
pub const DEFAULT_HEIGHT: u32 = 400;

/// A windowed particle visualization builder.
///
/// Use method chaining to configure, then call `.run()` to start.
///
/// ```ignore
/// use scintilla::Visualization;
///
/// Visualization::new()
///     .with_size(250, 400)
///     .with_title("score card")
///     .run();
/// ```
pub struct Visualization {
    width: u32,
    height: u32,
    title: String,
    seed: Option<u64>,
}

impl Visualization {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: "scintilla".to_string(),
            seed: None,
        }
    }

    /// Set the surface size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Seed the random source for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Open the window and run until it is closed. Blocks. All failures are
    /// logged and swallowed.
    pub fn run(self) {
        let event_loop = match EventLoop::new() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                log::warn!("{}", ViewerError::from(e));
                return;
            }
        };
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        if let Err(e) = event_loop.run_app(&mut app) {
            log::warn!("{}", ViewerError::from(e));
        }
    }
}

impl Default for Visualization {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    config: Visualization,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    animation: Option<AnimationLoop>,
}

impl App {
    fn new(config: Visualization) -> Self {
        Self {
            config,
            window: None,
            pixels: None,
            animation: None,
        }
    }

    fn init_output(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(Arc<Window>, Pixels<'static>, AnimationLoop), ViewerError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = Pixels::new(self.config.width, self.config.height, surface_texture)?;

        let engine = match self.config.seed {
            Some(seed) => Engine::with_rng(
                self.config.width,
                self.config.height,
                Box::new(EntropySource::seeded(seed)),
            ),
            None => Engine::new(self.config.width, self.config.height),
        };
        Ok((window, pixels, AnimationLoop::new(engine)))
    }

    fn redraw(&mut self) {
        let (Some(animation), Some(pixels), Some(window)) =
            (&mut self.animation, &mut self.pixels, &self.window)
        else {
            return;
        };

        let timestamp = animation.clock().now_ms();
        if !animation.tick(timestamp) {
            // Cancelled while this frame was pending; do not re-arm.
            return;
        }

        let frame = animation.engine().surface().frame();
        if pixels.frame_mut().len() == frame.len() {
            pixels.frame_mut().copy_from_slice(frame);
        }
        match pixels.render() {
            Ok(()) => window.request_redraw(),
            Err(e) => {
                log::warn!("{}", ViewerError::from(e));
                // Stop cleanly rather than spin on a dead surface.
                animation.stop();
            }
        }
    }

    fn handle_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            // Minimized; keep the last field, nothing to draw.
            return;
        }
        if let Some(animation) = &mut self.animation {
            animation.resize(width, height);
        }
        if let Some(pixels) = &mut self.pixels {
            let resized = match pixels.resize_surface(width, height) {
                Ok(()) => pixels.resize_buffer(width, height),
                Err(e) => Err(e),
            };
            if let Err(e) = resized {
                log::warn!("{}", ViewerError::from(e));
                self.pixels = None;
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match self.init_output(event_loop) {
            Ok((window, pixels, animation)) => {
                window.request_redraw();
                self.window = Some(window);
                self.pixels = Some(pixels);
                self.animation = Some(animation);
            }
            Err(e) => {
                // Non-fatal: the visualization simply never starts.
                log::warn!("viewer unavailable: {}", e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(animation) = &mut self.animation {
                    animation.stop();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.handle_resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }
}
