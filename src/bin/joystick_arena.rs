//! Joystick Arena - interactive control loop
//!
//! Run with: `cargo run --bin joystick_arena [-- --config arena.json]`
//!
//! Controls:
//! - Mouse / touch: press anywhere to place the joystick, drag to steer
//! - Release, or leave the window, to stop
//! - ESC: Exit
//!
//! The window has no renderer attached; the capsule and camera state are shown
//! in the title bar and logged once per second.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use capsule_arena_engine::config::ArenaConfig;
use capsule_arena_engine::input::raw_pointer_event;
use capsule_arena_engine::session::ArenaSession;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

struct JoystickArenaApp {
    window: Option<Arc<Window>>,
    session: ArenaSession,
    last_frame: Instant,
    last_status: Instant,
    frame_count: u32,
}

impl JoystickArenaApp {
    fn new(config: ArenaConfig) -> Self {
        let now = Instant::now();
        Self {
            window: None,
            session: ArenaSession::new(config),
            last_frame: now,
            last_status: now,
            frame_count: 0,
        }
    }

    fn update(&mut self) {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let frame = self.session.tick(delta_time);

        let since_status = now.duration_since(self.last_status).as_secs_f32();
        if since_status >= 1.0 {
            let fps = self.frame_count as f32 / since_status;
            self.frame_count = 0;
            self.last_status = now;

            let status = format!(
                "pos ({:.2}, {:.2}, {:.2}) | heading {:.0}° | stick ({:.2}, {:.2}) | cam ({:.1}, {:.1}, {:.1}) | {:.0} fps",
                frame.position.x,
                frame.position.y,
                frame.position.z,
                frame.heading.to_degrees(),
                frame.direction.x,
                frame.direction.y,
                frame.camera_position.x,
                frame.camera_position.y,
                frame.camera_position.z,
                fps
            );
            log::info!("{status}");
            if let Some(window) = &self.window {
                window.set_title(&format!("Capsule Arena - {status}"));
            }
        }
    }
}

impl ApplicationHandler for JoystickArenaApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Capsule Arena")
                .with_inner_size(PhysicalSize::new(1280, 720));
            match event_loop.create_window(attrs) {
                Ok(window) => {
                    self.window = Some(Arc::new(window));
                    self.last_frame = Instant::now();
                }
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        if let Some(raw) = raw_pointer_event(&event) {
            self.session.handle_raw(raw);
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    && event.state == ElementState::Pressed
                {
                    event_loop.exit();
                }
            }
            WindowEvent::Focused(false) => {
                // Releases that happen while unfocused never reach us
                self.session.on_pointer_up();
            }
            WindowEvent::RedrawRequested => self.update(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn load_config() -> anyhow::Result<ArenaConfig> {
    let args: Vec<String> = std::env::args().collect();
    match args.iter().skip_while(|a| a.as_str() != "--config").nth(1) {
        Some(path) => {
            log::info!("loading config: {path}");
            ArenaConfig::load(path).with_context(|| format!("loading config {path}"))
        }
        None => Ok(ArenaConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    // Developer-friendly default logging (info+) unless RUST_LOG overrides
    let default = "info,capsule_arena_engine=info";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();

    let config = load_config()?;

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = JoystickArenaApp::new(config);
    event_loop.run_app(&mut app).context("running event loop")?;
    Ok(())
}
