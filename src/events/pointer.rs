use crate::dom::{self, ListenerHandle};
use crate::input;
use crate::overlay;
use heart_core::constants::BOUNCE_RESTORE_MS;
use heart_core::{BounceTicket, Scene, SceneEvent};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer, wheel and resize wiring for the canvas. The returned handles
/// keep the listeners alive.
pub fn wire_pointer_handlers(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Vec<ListenerHandle> {
    [
        wire_pointerdown(canvas, scene),
        wire_pointermove(window, canvas, scene),
        wire_pointerup(window, canvas, scene),
        wire_pointer_abort(window, "pointercancel", scene),
        wire_pointer_abort(canvas, "lostpointercapture", scene),
        wire_wheel(canvas, scene),
        wire_resize(window, canvas, scene),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn wire_pointerdown(
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Option<ListenerHandle> {
    let canvas_c = canvas.clone();
    let scene = scene.clone();
    ListenerHandle::new::<web::PointerEvent, _>(canvas, "pointerdown", false, move |ev| {
        if ev.button() != 0 {
            return;
        }
        // Keep receiving moves when the pointer leaves the canvas mid-drag
        _ = canvas_c.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
        let pos = input::pointer_canvas_css(&ev, &canvas_c);
        scene.borrow_mut().pointer_down(pos.x, pos.y);
    })
}

fn wire_pointermove(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Option<ListenerHandle> {
    let canvas = canvas.clone();
    let scene = scene.clone();
    ListenerHandle::new::<web::PointerEvent, _>(window, "pointermove", true, move |ev| {
        let pos = input::pointer_canvas_css(&ev, &canvas);
        scene.borrow_mut().pointer_move(pos.x, pos.y);
    })
}

fn wire_pointerup(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Option<ListenerHandle> {
    let canvas = canvas.clone();
    let scene_c = scene.clone();
    ListenerHandle::new::<web::PointerEvent, _>(window, "pointerup", true, move |ev| {
        if ev.button() != 0 {
            return;
        }
        let pos = input::pointer_canvas_css(&ev, &canvas);
        let event = scene_c.borrow_mut().pointer_up(pos.x, pos.y);
        if let Some(SceneEvent::HeartActivated { ticket }) = event {
            if let Some(document) = dom::window_document() {
                overlay::show(&document);
            }
            schedule_bounce_restore(Rc::downgrade(&scene_c), ticket);
        }
    })
}

/// The browser took the gesture away; reset without a hit test. After a
/// normal release the controller is already idle and this does nothing.
fn wire_pointer_abort(
    target: &web::EventTarget,
    event: &'static str,
    scene: &Rc<RefCell<Scene>>,
) -> Option<ListenerHandle> {
    let scene = scene.clone();
    ListenerHandle::new::<web::PointerEvent, _>(target, event, true, move |_| {
        scene.borrow_mut().pointer_cancel();
    })
}

fn wire_wheel(
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Option<ListenerHandle> {
    let scene = scene.clone();
    // Non-passive so the page does not scroll while zooming
    ListenerHandle::new::<web::WheelEvent, _>(canvas, "wheel", false, move |ev| {
        ev.prevent_default();
        scene.borrow_mut().wheel(input::wheel_delta_px(&ev));
    })
}

fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Option<ListenerHandle> {
    let canvas = canvas.clone();
    let scene = scene.clone();
    ListenerHandle::new::<web::Event, _>(window, "resize", true, move |_| {
        let viewport = dom::sync_canvas_backing_size(&canvas);
        scene.borrow_mut().resize(viewport);
    })
}

/// Restore the pre-bounce scale after `BOUNCE_RESTORE_MS`. The timer holds
/// only a weak reference, so it is inert once the app has been torn down.
fn schedule_bounce_restore(scene: Weak<RefCell<Scene>>, ticket: BounceTicket) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(move || {
        if ticket.is_cancelled() {
            return;
        }
        let Some(scene) = scene.upgrade() else {
            return;
        };
        let Ok(mut scene) = scene.try_borrow_mut() else {
            log::warn!("[input] scene busy, bounce restore skipped");
            return;
        };
        scene.finish_bounce(&ticket);
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        BOUNCE_RESTORE_MS as i32,
    ) {
        log::warn!("[input] could not schedule bounce restore: {e:?}");
    }
}
