use std::cell::Cell;

use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::DPR_CAP;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Device pixel ratio clamped to the backing-store cap.
pub fn device_pixel_ratio() -> f64 {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(DPR_CAP)
    } else {
        1.0
    }
}

/// CSS box of an element, floored and kept at least 1x1.
pub fn css_size(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (rect.width().floor() as f32).max(1.0),
        (rect.height().floor() as f32).max(1.0),
    )
}

/// Match the canvas backing store to a CSS size at the capped pixel ratio
/// and pin its CSS box to that size. Returns the ratio used.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, size: Vec2) -> f64 {
    let dpr = device_pixel_ratio();
    canvas.set_width((size.x as f64 * dpr).floor().max(1.0) as u32);
    canvas.set_height((size.y as f64 * dpr).floor().max(1.0) as u32);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", size.x));
    _ = style.set_property("height", &format!("{}px", size.y));
    dpr
}

fn media_matches(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// OS-level request to minimise animation.
pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn has_fine_pointer() -> bool {
    media_matches("(pointer: fine)")
}

/// Pointer position as percentages of an element's box.
pub fn pointer_percent(ev: &web::PointerEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    let w = rect.width().max(1.0);
    let h = rect.height().max(1.0);
    Vec2::new(
        ((ev.client_x() as f64 - rect.left()) / w * 100.0) as f32,
        ((ev.client_y() as f64 - rect.top()) / h * 100.0) as f32,
    )
}

/// Listener registration that unhooks itself when dropped.
///
/// The gate owns its handles and drops them on close; page-lifetime
/// decorator wiring uses [`forget_listener`] instead.
pub struct EventHandle {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventHandle {
    pub fn listen(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
        _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }

    /// Leave the listener attached for the page lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for EventHandle {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Permanently attach a listener (page-lifetime wiring).
pub fn forget_listener(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Owned `setTimeout` with an idempotent clear.
pub struct TimeoutHandle {
    id: Cell<Option<i32>>,
    _closure: Closure<dyn FnMut()>,
}

impl TimeoutHandle {
    pub fn once(delay_ms: f64, handler: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = web::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .ok()
        });
        Self {
            id: Cell::new(id),
            _closure: closure,
        }
    }

    pub fn clear(&self) {
        if let Some(w) = web::window() {
            if let Some(id) = self.id.take() {
                w.clear_timeout_with_handle(id);
            }
        }
    }
}
