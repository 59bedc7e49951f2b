//! Scroll-triggered reveal for content blocks.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::*;
use crate::core::anim;
use crate::dom;

pub fn init(document: &web::Document) {
    let Ok(targets) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    if targets.length() == 0 {
        return;
    }

    let mut elements = Vec::new();
    for i in 0..targets.length() {
        let Some(el) = targets
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        _ = el.set_attribute("data-cyber-reveal", "true");
        let delay = anim::reveal_delay_ms(i as usize, REVEAL_DELAY_STEP_MS, REVEAL_DELAY_MAX_MS);
        _ = el.style().set_property("--cyber-delay", &format!("{delay}ms"));
        elements.push(el);
    }

    // Without observation the reveal is immediate and no observer exists.
    if dom::prefers_reduced_motion() || !observer_supported() {
        for el in &elements {
            _ = el.class_list().add_1("cyber-reveal-visible");
        }
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                _ = target.class_list().add_1("cyber-reveal-visible");
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for el in &elements {
        observer.observe(el);
    }
}

fn observer_supported() -> bool {
    web::window()
        .map(|w| {
            js_sys::Reflect::has(w.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}
