//! Scurry - colored squares on a random walk
//!
//! A fixed population of walkers spawns at the window center, each with a
//! distinct palette color, and diffuses outward one random step per frame,
//! leaving trails. Space toggles pause; closing the window quits.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use scurry_core::{Simulation, World};
use scurry_render::{
    context::RenderContext,
    canvas::TrailCanvas,
    pipeline::{BlitPipeline, SquaresPipeline},
    square_instances,
};

use scurry::AppConfig;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    squares_pipeline: Option<SquaresPipeline>,
    blit_pipeline: Option<BlitPipeline>,
    canvas: Option<TrailCanvas>,
    /// The walker simulation; populated once the window size is known
    simulation: Simulation,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let mut simulation = Simulation::new(World::new(), config.simulation.seed);
        simulation.set_paused(config.simulation.start_paused);

        Self {
            config,
            window: None,
            render_context: None,
            squares_pipeline: None,
            blit_pipeline: None,
            canvas: None,
            simulation,
        }
    }

    fn background_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.config.rendering.background_color;
        wgpu::Color { r, g, b, a }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let mut window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));
            if self.config.window.fullscreen {
                window_attributes =
                    window_attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
            }

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            // Create render context
            let render_context = pollster::block_on(RenderContext::new(
                window.clone(),
                self.config.window.vsync,
            ))
            .unwrap_or_else(|e| panic!("Failed to initialize renderer: {}", e));

            let size = window.inner_size();
            let format = render_context.config.format;

            // Create pipelines and the trail canvas
            let squares_pipeline = SquaresPipeline::new(&render_context.device, format);
            squares_pipeline.set_canvas_size(&render_context.queue, size.width, size.height);
            let canvas = TrailCanvas::new(&render_context.device, format, size.width, size.height);
            let blit_pipeline = BlitPipeline::new(&render_context.device, format, canvas.view());

            // Spawn the population at the window center; more walkers than
            // palette colors is fatal at startup, nothing to recover into.
            let count = self.config.simulation.walker_count;
            let center = (size.width as i32 / 2, size.height as i32 / 2);
            let step_size = self.config.simulation.step_size;
            self.simulation
                .spawn_centered(count, center, step_size)
                .unwrap_or_else(|e| panic!("Failed to spawn walkers: {}", e));

            log::info!(
                "Spawned {} walkers at ({}, {}) with step size {}",
                count,
                center.0,
                center.1,
                step_size
            );

            window.request_redraw();

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.squares_pipeline = Some(squares_pipeline);
            self.blit_pipeline = Some(blit_pipeline);
            self.canvas = Some(canvas);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed, shutting down");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                    if let Some(squares) = &self.squares_pipeline {
                        squares.set_canvas_size(
                            &ctx.queue,
                            physical_size.width,
                            physical_size.height,
                        );
                    }
                    if let Some(canvas) = &mut self.canvas {
                        let recreated =
                            canvas.resize(&ctx.device, physical_size.width, physical_size.height);
                        if recreated {
                            if let Some(blit) = &mut self.blit_pipeline {
                                blit.rebind(&ctx.device, canvas.view());
                            }
                        }
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Space) = event.physical_key {
                    if event.state == ElementState::Pressed && !event.repeat {
                        let paused = self.simulation.toggle_pause();
                        log::info!("{}", if paused { "Paused" } else { "Running" });
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                // Advance the walk; a paused step touches nothing
                let stepped = self.simulation.step();
                let background = self.background_color();

                if let (Some(ctx), Some(squares), Some(blit), Some(canvas)) = (
                    &mut self.render_context,
                    &mut self.squares_pipeline,
                    &self.blit_pipeline,
                    &mut self.canvas,
                ) {
                    // Get surface texture
                    let output = match ctx.surface.get_current_texture() {
                        Ok(output) => output,
                        Err(wgpu::SurfaceError::Lost) => {
                            let size = ctx.size;
                            ctx.resize(size);
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                            return;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Surface out of memory, shutting down");
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            // Transient (e.g. Outdated mid-resize): skip the
                            // frame but keep the redraw chain alive.
                            log::warn!("Surface error: {:?}", e);
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                            return;
                        }
                    };

                    let view = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());

                    let mut encoder =
                        ctx.device
                            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("Frame Encoder"),
                            });

                    // Rasterize squares only on frames that actually
                    // stepped; a fresh canvas still needs its clear.
                    let clear = canvas.take_clear().then_some(background);
                    if stepped || clear.is_some() {
                        let instances = if stepped {
                            square_instances(self.simulation.world())
                        } else {
                            Vec::new()
                        };
                        squares.upload_instances(&ctx.device, &ctx.queue, &instances);
                        squares.record(&mut encoder, canvas.view(), clear, instances.len() as u32);
                    }

                    // The canvas is presented every frame, paused or not
                    blit.record(&mut encoder, &view);

                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting scurry");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
