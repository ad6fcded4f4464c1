#![cfg(target_arch = "wasm32")]
//! Browser front-end: canvas bootstrap, DOM wiring and the frame loop around
//! `heart-core` and `heart-render`.

use anyhow::Context;
use heart_core::Scene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

/// Everything a running instance owns. Dropping it tears the app down.
struct App {
    frame_loop: frame::FrameLoop,
    scene: Rc<RefCell<Scene>>,
    listeners: Vec<dom::ListenerHandle>,
}

impl Drop for App {
    fn drop(&mut self) {
        self.frame_loop.stop();
        if let Ok(mut scene) = self.scene.try_borrow_mut() {
            scene.shutdown();
        }
        self.frame_loop.release_gpu();
        self.listeners.clear();
        log::info!("[app] stopped");
    }
}

enum Phase {
    Stopped,
    Starting,
    Running(App),
}

thread_local! {
    static PHASE: RefCell<Phase> = const { RefCell::new(Phase::Stopped) };
    // Bumped by every start and shutdown; an init that finishes under a
    // stale generation discards what it built.
    static GENERATION: Cell<u64> = const { Cell::new(0) };
}

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");
    start();
}

/// Build and run the app. Ignored while an instance is starting or running.
#[wasm_bindgen]
pub fn start() {
    let idle = PHASE.with(|p| matches!(*p.borrow(), Phase::Stopped));
    if !idle {
        log::info!("[app] already running");
        return;
    }
    PHASE.with(|p| *p.borrow_mut() = Phase::Starting);
    let generation = GENERATION.with(|g| {
        g.set(g.get() + 1);
        g.get()
    });

    spawn_local(async move {
        let app = match init().await {
            Ok(app) => app,
            Err(e) => {
                log::error!("init error: {e:?}");
                dom::show_fatal(&format!("Could not start the renderer: {e}"));
                if GENERATION.with(|g| g.get()) == generation {
                    PHASE.with(|p| *p.borrow_mut() = Phase::Stopped);
                }
                return;
            }
        };
        if GENERATION.with(|g| g.get()) != generation {
            // shutdown() ran while we were initialising
            drop(app);
            return;
        }
        PHASE.with(|p| *p.borrow_mut() = Phase::Running(app));
        log::info!("[app] running");
    });
}

/// Stop the loop, cancel pending timers, release the GPU and unregister
/// every listener. `start` may be called again afterwards.
#[wasm_bindgen]
pub fn shutdown() {
    GENERATION.with(|g| g.set(g.get() + 1));
    let previous = PHASE.with(|p| std::mem::replace(&mut *p.borrow_mut(), Phase::Stopped));
    // Dropped outside the borrow so teardown can't observe PHASE mid-update
    drop(previous);
}

async fn init() -> anyhow::Result<App> {
    let window = web::window().context("no window")?;
    let document = window.document().context("no document")?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .with_context(|| format!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {e:?}", constants::CANVAS_ID))?;

    let viewport = dom::sync_canvas_backing_size(&canvas);
    let scene = Scene::new(&mut rand::thread_rng(), viewport)?;
    let gpu = frame::init_gpu(&canvas, &scene)
        .await
        .map_err(|e| anyhow::anyhow!("WebGPU init failed: {e}"))?;
    let scene = Rc::new(RefCell::new(scene));

    let mut listeners = events::pointer::wire_pointer_handlers(&window, &canvas, &scene);
    listeners.extend(events::controls::wire_controls(&window, &document, &scene));
    log::info!("[app] {} listeners registered", listeners.len());

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        gpu: Some(gpu),
        canvas,
    }));
    let frame_loop = frame::FrameLoop::start_loop(ctx);

    Ok(App {
        frame_loop,
        scene,
        listeners,
    })
}
