use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use lookat_camera::cli::Cli;
use lookat_camera::core::{Clock, Document, Element, WinitInputAdapter};
use lookat_camera::demo;
use lookat_camera::logging::init_logging;
use lookat_camera::renderer::CubeRenderer;
use lookat_camera::rig::CameraRig;

// === Constants ===

const CANVAS_ID: &str = "webgpu-canvas";

// === Application ===

struct App {
    cli: Cli,
    _document: Document,
    canvas: Element,
    rig: CameraRig,
    window: Option<Arc<Window>>,
    renderer: Option<CubeRenderer>,
    input: WinitInputAdapter,
    clock: Clock,
    uploaded_total: Option<u32>,
}

impl App {
    fn new(cli: Cli) -> anyhow::Result<Self> {
        let config = cli.resolve_config()?;

        let mut document = Document::new();
        let canvas = document.insert(Element::new(CANVAS_ID, cli.width, cli.height));
        let rig = CameraRig::new(&document, CANVAS_ID, &config, !cli.no_ui)?;

        Ok(Self {
            cli,
            _document: document,
            canvas,
            rig,
            window: None,
            renderer: None,
            input: WinitInputAdapter::default(),
            clock: Clock::new(),
            uploaded_total: None,
        })
    }

    fn ui_enabled(&self) -> bool {
        !self.cli.no_ui
    }

    /// Advance the redraw debounce; uploads the camera and scene when it fires
    fn advance(&mut self, delta: f32) {
        if !self.rig.tick(delta) {
            return;
        }
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        renderer.update_globals(&self.rig.uniform());
        let total = self.rig.total();
        if self.uploaded_total != Some(total) {
            renderer.set_instances(&demo::instances(total));
            self.uploaded_total = Some(total);
            log::debug!("uploaded {total} instances");
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let pane = if self.cli.no_ui { None } else { self.rig.pane() };
        match renderer.render(window, pane) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = window.inner_size();
                renderer.resize(size.width, size.height);
                window.request_redraw();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("render error: out of GPU memory");
                self.rig.dispose();
                event_loop.exit();
            }
            Err(err) => log::error!("render error: {err}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let variant = self.cli.demo;
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(variant.title())
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(CubeRenderer::new(window.clone(), variant)) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("failed to initialize renderer: {e:#}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.input.set_scale_factor(window.scale_factor());
        self.rig.resize(size.width, size.height);
        self.rig.request_redraw();
        self.uploaded_total = None;

        log::info!(
            "{}: {} ({} instances, far plane {})",
            variant.title(),
            variant.description(),
            self.rig.total(),
            self.rig.camera().borrow().config().far
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        let mut captured = false;
        if self.ui_enabled() {
            if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                captured = renderer.handle_event(window, &event);
                if !matches!(event, WindowEvent::RedrawRequested) {
                    window.request_redraw();
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.rig.dispose();
                event_loop.exit();
            }
            // Escape inside a focused egui field cancels the edit instead
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } if !captured => {
                self.rig.dispose();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                self.rig.resize(size.width, size.height);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.input.set_scale_factor(scale_factor);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                self.input.route_event(&self.canvas, &other, captured);
            }
        }
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, _cause: StartCause) {
        // Time spent waiting counts towards a debounce armed before the wait
        let delta = self.clock.tick();
        self.advance(delta);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        self.advance(delta);

        match self.rig.remaining() {
            Some(remaining) => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline(remaining)))
            }
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter.as_deref());

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(cli)?;

    log::info!("Controls: drag to orbit, right-drag or meta-drag to pan, wheel to dolly, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
