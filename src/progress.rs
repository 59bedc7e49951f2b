//! Reading-progress bar injected on article pages.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::anim;
use crate::dom;

pub fn init(document: &web::Document) {
    let Ok(Some(article)) = document.query_selector(ARTICLE_SELECTOR) else {
        return;
    };
    let Ok(article) = article.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let Some(body) = document.body() else { return };

    let Ok(bar) = document.create_element("div") else {
        return;
    };
    bar.set_class_name("cyber-reading-progress");
    let Ok(fill_el) = document.create_element("div") else {
        return;
    };
    fill_el.set_class_name("cyber-reading-progress__fill");
    let Ok(fill) = fill_el.dyn_into::<web::HtmlElement>() else {
        return;
    };
    if bar.append_child(&fill).is_err() || body.append_child(&bar).is_err() {
        return;
    }

    let ticking = Rc::new(Cell::new(false));
    update(&article, &bar, &fill, &ticking);

    // Scroll and resize coalesce into one pending animation frame.
    let update_closure = {
        let article = article.clone();
        let bar = bar.clone();
        let fill = fill.clone();
        let ticking = ticking.clone();
        Rc::new(Closure::wrap(Box::new(move || {
            update(&article, &bar, &fill, &ticking);
        }) as Box<dyn FnMut()>))
    };

    if let Some(window) = web::window() {
        let schedule = {
            let window = window.clone();
            move |_: web::Event| {
                if ticking.replace(true) {
                    return;
                }
                _ = window.request_animation_frame((*update_closure).as_ref().unchecked_ref());
            }
        };
        dom::forget_listener(&window, "scroll", schedule.clone());
        dom::forget_listener(&window, "resize", schedule);
    }
}

fn update(article: &web::HtmlElement, bar: &web::Element, fill: &web::HtmlElement, ticking: &Cell<bool>) {
    if let Some(window) = web::window() {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let rect = article.get_bounding_client_rect();
        let article_top = scroll_y + rect.top();
        let article_height = article.offset_height() as f64;

        let progress = anim::progress_fraction(
            scroll_y,
            article_top,
            article_height,
            viewport,
            PROGRESS_START_VIEWPORT_FRAC,
            PROGRESS_END_VIEWPORT_FRAC,
        );

        _ = fill
            .style()
            .set_property("transform", &format!("scaleX({progress:.4})"));
        let visible = progress > PROGRESS_SHOW_MIN && progress < PROGRESS_SHOW_MAX;
        _ = bar.class_list().toggle_with_force("is-visible", visible);
    }
    ticking.set(false);
}
