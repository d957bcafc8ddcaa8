//! Backdrop window: event wiring between winit, the field, and the renderer.
//!
//! One `RedrawRequested` is one tick: the frame clock advances, the hero text
//! machines tick, the field advances into the draw list, and the list is
//! rendered. Pointer-move and resize events only mutate state; their effect
//! becomes visible on the next tick.

use std::sync::Arc;

use glam::Vec2;
use tracing::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::canvas::DrawList;
use crate::config::FieldConfig;
use crate::error::BackdropError;
use crate::field::ParticleField;
use crate::gpu::GpuState;
use crate::hero::{TaglineCycler, Typewriter, TYPE_DELAY};
use crate::time::Time;

/// A particle backdrop window builder.
///
/// Use method chaining to configure, then call `.run()` to start. The
/// optional heading is typed into the window title character by character;
/// taglines rotate after it once the typing finishes.
#[derive(Debug, Clone)]
pub struct Backdrop {
    title: String,
    width: u32,
    height: u32,
    config: FieldConfig,
    heading: Option<String>,
    taglines: Vec<String>,
    min_effect_width: u32,
}

impl Backdrop {
    pub fn new() -> Self {
        Self {
            title: "driftfield".to_string(),
            width: 1280,
            height: 720,
            config: FieldConfig::default(),
            heading: None,
            taglines: Vec::new(),
            // The original effect is disabled on narrow (phone-sized)
            // surfaces to avoid lag on weak devices.
            min_effect_width: 768,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn with_taglines<I, S>(mut self, taglines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.taglines = taglines.into_iter().map(Into::into).collect();
        self
    }

    /// Surface width at or below which the particle effect stays empty.
    pub fn with_min_effect_width(mut self, width: u32) -> Self {
        self.min_effect_width = width;
        self
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), BackdropError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        match app.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    settings: Backdrop,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: ParticleField,
    frame: DrawList,
    time: Time,
    typewriter: Option<Typewriter>,
    cycler: Option<TaglineCycler>,
    last_title: String,
    error: Option<BackdropError>,
}

impl App {
    fn new(settings: Backdrop) -> Self {
        let field = ParticleField::new(settings.config.clone());
        let typewriter = settings
            .heading
            .as_ref()
            .map(|h| Typewriter::new(h.clone(), TYPE_DELAY));

        Self {
            last_title: settings.title.clone(),
            settings,
            window: None,
            gpu: None,
            field,
            frame: DrawList::new(),
            time: Time::new(),
            typewriter,
            cycler: None,
            error: None,
        }
    }

    /// Seed or empty the field for the given surface size, honoring the
    /// minimum-width gate.
    fn apply_surface_size(&mut self, width: u32, height: u32) {
        if width > self.settings.min_effect_width {
            self.field.resize(width as f32, height as f32);
        } else {
            self.field.clear();
        }
    }

    fn tick_hero(&mut self) {
        let dt = self.time.delta_duration();

        let typing_done = match &mut self.typewriter {
            Some(tw) => {
                tw.tick(dt);
                tw.is_done()
            }
            None => true,
        };

        // The rotation starts only after the heading has finished typing.
        if typing_done && self.cycler.is_none() && !self.settings.taglines.is_empty() {
            self.cycler = Some(TaglineCycler::new(self.settings.taglines.clone()));
        }
        if let Some(cycler) = &mut self.cycler {
            cycler.tick(dt);
        }

        let title = self.desired_title();
        if title != self.last_title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.last_title = title;
        }
    }

    fn desired_title(&self) -> String {
        let mut title = match &self.typewriter {
            Some(tw) if !tw.visible().is_empty() => tw.visible().to_string(),
            _ => self.settings.title.clone(),
        };
        if let Some(cycler) = &self.cycler {
            if cycler.is_visible() {
                if let Some(tagline) = cycler.current() {
                    title = format!("{} | {}", title, tagline);
                }
            }
        }
        title
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.settings.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.width,
                self.settings.height,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("window creation failed: {}", e);
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        let gpu = match pollster::block_on(GpuState::new(window.clone())) {
            Ok(gpu) => gpu,
            Err(e) => {
                error!("GPU initialization failed: {}", e);
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.apply_surface_size(size.width, size.height);
        info!(
            width = size.width,
            height = size.height,
            particles = self.field.len(),
            "backdrop window ready"
        );

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(gpu);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                self.apply_surface_size(physical_size.width, physical_size.height);
                debug!(
                    width = physical_size.width,
                    height = physical_size.height,
                    particles = self.field.len(),
                    "resized and reseeded"
                );
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Last write wins; the next tick sees the newest position.
                self.field
                    .set_pointer(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::RedrawRequested => {
                self.time.update();
                self.tick_hero();

                self.field.advance(&mut self.frame);

                if let Some(gpu) = &mut self.gpu {
                    match gpu.render(&self.frame) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            });
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("surface out of memory");
                            event_loop.exit();
                        }
                        Err(e) => warn!("render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_defaults() {
        let backdrop = Backdrop::new();
        assert_eq!(backdrop.min_effect_width, 768);
        assert_eq!((backdrop.width, backdrop.height), (1280, 720));
        assert!(backdrop.heading.is_none());
        assert!(backdrop.taglines.is_empty());
    }

    #[test]
    fn test_narrow_surface_keeps_field_empty() {
        let backdrop = Backdrop::new().with_min_effect_width(768);
        let mut app = App::new(backdrop);

        app.apply_surface_size(600, 900);
        assert!(app.field.is_empty());

        app.apply_surface_size(1280, 720);
        assert!(!app.field.is_empty());

        app.apply_surface_size(768, 900);
        assert!(app.field.is_empty());
    }

    #[test]
    fn test_title_combines_heading_and_tagline() {
        let backdrop = Backdrop::new()
            .with_heading("KYNECTED")
            .with_taglines(["One call, get connected..."]);
        let mut app = App::new(backdrop);
        app.time.set_fixed_delta(Some(0.1));

        // Before any typing the base title stands in.
        assert_eq!(app.desired_title(), "driftfield");

        // 8 characters at 140 ms plus the 500 ms fade: 2 s covers it all.
        for _ in 0..20 {
            app.time.update();
            app.tick_hero();
        }
        assert_eq!(app.desired_title(), "KYNECTED | One call, get connected...");
    }
}
