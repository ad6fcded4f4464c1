use crate::constants::OVERLAY_ID;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Open `url` in a new tab.
pub fn open_link(url: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.open_with_url_and_target(url, "_blank") {
            log::warn!("[overlay] could not open link: {e:?}");
        }
    }
}
