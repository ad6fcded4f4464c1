use crate::constants::FATAL_ID;
use heart_core::constants::MAX_PIXEL_RATIO;
use heart_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio (capped). Returns the CSS-pixel viewport used for picking.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    Viewport::new(rect.width() as f32, rect.height() as f32)
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Startup failed; put the reason on the page.
pub fn show_fatal(message: &str) {
    let Some(document) = window_document() else {
        return;
    };
    if let Some(el) = document.get_element_by_id(FATAL_ID) {
        el.set_text_content(Some(message));
        _ = el.class_list().remove_1("hidden");
    } else if let Some(body) = document.body() {
        body.set_text_content(Some(message));
    }
}

/// A registered DOM listener. Dropping the handle unregisters it.
pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerHandle {
    /// Register `handler` for `event` on `target`. Events that are not an
    /// `E` are ignored. With `passive == false` the handler may call
    /// `prevent_default`.
    pub fn new<E, F>(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        mut handler: F,
    ) -> Option<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::warn!("[dom] could not listen for {event}: {e:?}");
                None
            }
        }
    }

    /// Click listener on the element with `element_id`, if present.
    pub fn on_click(
        document: &web::Document,
        element_id: &str,
        mut handler: impl FnMut() + 'static,
    ) -> Option<Self> {
        let el = document.get_element_by_id(element_id)?;
        Self::new::<web::MouseEvent, _>(&el, "click", true, move |_| handler())
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
