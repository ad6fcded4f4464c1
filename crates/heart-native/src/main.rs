//! Desktop viewer: the same scene and renderer as the browser build, driven
//! by winit. Mouse and wheel map onto the pointer API; the control surface
//! and the overlay buttons are keyboard shortcuts.

use anyhow::Context;
use glam::Vec2;
use heart_core::constants::{BOUNCE_RESTORE_MS, SPEED_STEP};
use heart_core::{BounceTicket, Scene, SceneEvent, Viewport};
use heart_render::GpuState;
use instant::Instant;
use std::sync::Arc;
use std::time::Duration;
use winit::dpi::PhysicalSize;
use winit::event::*;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

const TITLE: &str = "Heart";
const TITLE_OVERLAY: &str = "Heart - I'm Sorry... [Enter] forgive  [Esc] close";
const LINE_DELTA_PX: f32 = 100.0; // one wheel notch in browser pixels

struct Viewer {
    gpu: Option<GpuState<'static>>,
    window: Arc<Window>,
    scene: Scene,
    cursor: Vec2,
    pending_bounce: Option<(Instant, BounceTicket)>,
    overlay_shown: bool,
}

impl Viewer {
    fn logical_viewport(window: &Window, size: PhysicalSize<u32>) -> Viewport {
        let logical = size.to_logical::<f32>(window.scale_factor());
        Viewport::new(logical.width, logical.height)
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(size.width, size.height);
        }
        self.scene.resize(Self::logical_viewport(&self.window, size));
    }

    fn handle_scene_event(&mut self, event: Option<SceneEvent>) {
        if let Some(SceneEvent::HeartActivated { ticket }) = event {
            let deadline = Instant::now() + Duration::from_millis(BOUNCE_RESTORE_MS as u64);
            self.pending_bounce = Some((deadline, ticket));
        }
    }

    fn mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        let Vec2 { x, y } = self.cursor;
        match state {
            ElementState::Pressed => self.scene.pointer_down(x, y),
            ElementState::Released => {
                let event = self.scene.pointer_up(x, y);
                self.handle_scene_event(event);
            }
        }
    }

    fn mouse_wheel(&mut self, delta: MouseScrollDelta) {
        // Browser convention: positive = scroll down = zoom out
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * LINE_DELTA_PX,
            MouseScrollDelta::PixelDelta(pos) => -(pos.y / self.window.scale_factor()) as f32,
        };
        self.scene.wheel(delta_y);
    }

    fn key_pressed(&mut self, key: &Key) {
        match key {
            Key::Named(NamedKey::Space) => {
                self.scene.toggle_animation();
            }
            Key::Named(NamedKey::Enter) => {
                if let Some(url) = self.scene.acknowledge_overlay() {
                    log::info!("[overlay] acknowledged, message link: {url}");
                }
            }
            Key::Named(NamedKey::Escape) => self.scene.close_overlay(),
            Key::Character(c) => match c.as_str() {
                "+" | "=" => self.adjust_speed(SPEED_STEP),
                "-" | "_" => self.adjust_speed(-SPEED_STEP),
                _ => {}
            },
            _ => {}
        }
    }

    fn adjust_speed(&mut self, step: f32) {
        let speed = self.scene.config.speed() + step;
        self.scene.set_speed(speed);
        log::info!("[scene] speed {:.1}x", self.scene.config.speed());
    }

    /// Run due timers, tick and draw.
    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        if let Some((deadline, _)) = &self.pending_bounce {
            if Instant::now() >= *deadline {
                if let Some((_, ticket)) = self.pending_bounce.take() {
                    self.scene.finish_bounce(&ticket);
                }
            }
        }

        let shown = self.scene.overlay().is_visible();
        if shown != self.overlay_shown {
            self.overlay_shown = shown;
            self.window.set_title(if shown { TITLE_OVERLAY } else { TITLE });
        }

        self.scene.tick();
        match &mut self.gpu {
            Some(gpu) => gpu.render(&self.scene),
            None => Ok(()),
        }
    }

    fn shutdown(&mut self) {
        self.scene.shutdown();
        self.pending_bounce = None;
        self.gpu = None;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new().context("event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(TITLE)
            .build(&event_loop)
            .context("window")?,
    );

    let size = window.inner_size();
    let scene = Scene::new(
        &mut rand::thread_rng(),
        Viewer::logical_viewport(&window, size),
    )?;
    let gpu = pollster::block_on(GpuState::new(
        window.clone(),
        size.width,
        size.height,
        &scene,
    ))?;

    let mut viewer = Viewer {
        gpu: Some(gpu),
        window,
        scene,
        cursor: Vec2::ZERO,
        pending_bounce: None,
        overlay_shown: false,
    };

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => viewer.resize(size),
            WindowEvent::CloseRequested => {
                viewer.shutdown();
                elwt.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f32>(viewer.window.scale_factor());
                viewer.cursor = Vec2::new(p.x, p.y);
                viewer.scene.pointer_move(p.x, p.y);
            }
            WindowEvent::MouseInput { state, button, .. } => viewer.mouse_input(state, button),
            WindowEvent::MouseWheel { delta, .. } => viewer.mouse_wheel(delta),
            // A press that loses focus never sees its release
            WindowEvent::Focused(false) => viewer.scene.pointer_cancel(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => viewer.key_pressed(&logical_key),
            _ => {}
        },
        Event::AboutToWait => {
            if elwt.exiting() {
                return;
            }
            match viewer.frame() {
                Ok(_) => viewer.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    if let Some(gpu) = &mut viewer.gpu {
                        gpu.reconfigure();
                    }
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory, exiting");
                    viewer.shutdown();
                    elwt.exit();
                }
                Err(e) => log::warn!("[gpu] frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
