use crate::constants::*;
use crate::dom::{self, ListenerHandle};
use crate::overlay;
use heart_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Play/pause button, speed slider, Space shortcut and the overlay buttons.
/// Missing elements are skipped.
pub fn wire_controls(
    window: &web::Window,
    document: &web::Document,
    scene: &Rc<RefCell<Scene>>,
) -> Vec<ListenerHandle> {
    sync_controls(document, &scene.borrow());
    [
        wire_play_pause(document, scene),
        wire_speed_slider(document, scene),
        wire_space_toggle(window, document, scene),
        wire_overlay_forgive(document, scene),
        wire_overlay_close(document, scene),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Bring button label and speed readout in line with the scene config.
fn sync_controls(document: &web::Document, scene: &Scene) {
    let label = if scene.config.is_animating {
        LABEL_PAUSE
    } else {
        LABEL_PLAY
    };
    dom::set_text(document, PLAY_PAUSE_ID, label);
    dom::set_text(document, SPEED_VALUE_ID, &speed_label(scene.config.speed()));
}

#[inline]
fn speed_label(speed: f32) -> String {
    format!("{speed:.1}x")
}

fn toggle(document: &web::Document, scene: &Rc<RefCell<Scene>>) {
    let mut scene = scene.borrow_mut();
    scene.toggle_animation();
    sync_controls(document, &scene);
}

fn wire_play_pause(document: &web::Document, scene: &Rc<RefCell<Scene>>) -> Option<ListenerHandle> {
    let doc = document.clone();
    let scene = scene.clone();
    ListenerHandle::on_click(document, PLAY_PAUSE_ID, move || toggle(&doc, &scene))
}

fn wire_speed_slider(
    document: &web::Document,
    scene: &Rc<RefCell<Scene>>,
) -> Option<ListenerHandle> {
    let slider = document
        .get_element_by_id(SPEED_SLIDER_ID)?
        .dyn_into::<web::HtmlInputElement>()
        .ok()?;
    slider.set_value(&format!("{:.1}", scene.borrow().config.speed()));
    let doc = document.clone();
    let scene = scene.clone();
    let slider_c = slider.clone();
    ListenerHandle::new::<web::Event, _>(&slider, "input", true, move |_| {
        let Ok(speed) = slider_c.value().parse::<f32>() else {
            return;
        };
        let mut scene = scene.borrow_mut();
        scene.set_speed(speed);
        dom::set_text(&doc, SPEED_VALUE_ID, &speed_label(scene.config.speed()));
    })
}

fn wire_space_toggle(
    window: &web::Window,
    document: &web::Document,
    scene: &Rc<RefCell<Scene>>,
) -> Option<ListenerHandle> {
    let doc = document.clone();
    let scene = scene.clone();
    ListenerHandle::new::<web::KeyboardEvent, _>(window, "keydown", false, move |ev| {
        if ev.code() != "Space" || ev.repeat() {
            return;
        }
        // Leave Space alone while a form control has focus
        if let Some(active) = doc.active_element() {
            if active.dyn_ref::<web::HtmlInputElement>().is_some()
                || active.dyn_ref::<web::HtmlButtonElement>().is_some()
            {
                return;
            }
        }
        ev.prevent_default();
        toggle(&doc, &scene);
    })
}

fn wire_overlay_forgive(
    document: &web::Document,
    scene: &Rc<RefCell<Scene>>,
) -> Option<ListenerHandle> {
    let doc = document.clone();
    let scene = scene.clone();
    ListenerHandle::on_click(document, OVERLAY_FORGIVE_ID, move || {
        let url = scene.borrow_mut().acknowledge_overlay();
        if let Some(url) = url {
            log::info!("[overlay] acknowledged");
            overlay::open_link(&url);
        }
        overlay::hide(&doc);
    })
}

fn wire_overlay_close(
    document: &web::Document,
    scene: &Rc<RefCell<Scene>>,
) -> Option<ListenerHandle> {
    let doc = document.clone();
    let scene = scene.clone();
    ListenerHandle::on_click(document, OVERLAY_CLOSE_ID, move || {
        scene.borrow_mut().close_overlay();
        overlay::hide(&doc);
    })
}
