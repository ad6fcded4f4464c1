use heart_core::Scene;
use heart_render::GpuState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub gpu: Option<GpuState<'static>>,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    /// Tick and draw one frame. Returns `false` when the loop should stop.
    pub fn frame(&mut self) -> bool {
        let Ok(mut scene) = self.scene.try_borrow_mut() else {
            return true;
        };
        scene.tick();
        let Some(g) = &mut self.gpu else {
            return true;
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        match g.render(&scene) {
            Ok(()) => true,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                g.reconfigure();
                true
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[gpu] out of memory, stopping");
                false
            }
            Err(e) => {
                log::warn!("[gpu] frame skipped: {e:?}");
                true
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
) -> Result<GpuState<'static>, heart_render::RenderInitError> {
    GpuState::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        canvas.width(),
        canvas.height(),
        scene,
    )
    .await
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The `requestAnimationFrame` loop. `stop` cancels the pending frame and
/// breaks the closure's self-reference.
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let tick_c = tick.clone();
        let raf_c = raf_id.clone();
        let ctx_c = ctx.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_c.set(None);
            let keep_going = match ctx_c.try_borrow_mut() {
                Ok(mut ctx) => ctx.frame(),
                Err(_) => true,
            };
            if !keep_going {
                // Breaks the self-reference; the closure is dropped after it returns
                if let Ok(mut slot) = tick_c.try_borrow_mut() {
                    if let Some(closure) = slot.take() {
                        wasm_bindgen_futures::spawn_local(async move { drop(closure) });
                    }
                }
                return;
            }
            raf_c.set(request_frame(&tick_c));
        }) as Box<dyn FnMut()>));
        raf_id.set(request_frame(&tick));

        Self { ctx, raf_id, tick }
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }

    /// Drop the renderer. Surface first, then device buffers.
    pub fn release_gpu(&mut self) {
        if let Ok(mut ctx) = self.ctx.try_borrow_mut() {
            if ctx.gpu.take().is_some() {
                log::info!("[gpu] released");
            }
        }
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.try_borrow().ok()?;
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
