//! Page decorator: fire-and-forget enhancements wired at load.
//!
//! Every behavior no-ops when its target selector is absent, so article
//! pages, listings, and the home page each pick up only what applies.

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::query;
use crate::core::rain::HERO_RAIN;
use crate::dom;
use crate::progress;
use crate::rain::RainLoop;
use crate::reveal;

pub fn init(document: &web::Document) {
    init_page_context(document);
    init_welcome_entry(document);
    init_hero_rain(document);
    progress::init(document);
    reveal::init(document);
    init_card_glow(document);
}

fn init_page_context(document: &web::Document) {
    let Some(window) = web::window() else { return };
    let path = window.location().pathname().unwrap_or_default();
    if query::is_tags_path(&path) {
        if let Some(root) = document.document_element() {
            _ = root.class_list().add_1("page-tags");
        }
    }
}

/// Href for the brand link so it re-enters through the welcome gate,
/// preserving the original path, query, and fragment.
pub fn welcome_entry_href(base: &str, origin: &str) -> String {
    let base = if base.is_empty() { "/" } else { base };
    match web::Url::new_with_base(base, origin) {
        Ok(url) => {
            let search = query::set_param(&url.search(), WELCOME_PARAM, WELCOME_VALUE);
            query::compose_href(&url.pathname(), &search, &url.hash())
        }
        Err(_) => FALLBACK_WELCOME_HREF.to_string(),
    }
}

fn init_welcome_entry(document: &web::Document) {
    let Ok(Some(menu)) = document.query_selector(MAIN_MENU_SELECTOR) else {
        return;
    };
    let Some(brand) = brand_link(&menu) else { return };
    let origin = web::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    let base = brand.get_attribute("href").unwrap_or_else(|| "/".into());
    _ = brand.set_attribute("href", &welcome_entry_href(&base, &origin));
    _ = brand.set_attribute("aria-label", "进入欢迎页");
}

/// The brand link is the direct `<a>` child carrying both truncation classes.
fn brand_link(menu: &web::Element) -> Option<web::Element> {
    let children = menu.children();
    for i in 0..children.length() {
        let Some(el) = children.item(i) else { continue };
        if el.tag_name() != "A" {
            continue;
        }
        let classes = el.class_list();
        if classes.contains("truncate") && classes.contains("shrink") {
            return Some(el);
        }
    }
    None
}

fn init_hero_rain(document: &web::Document) {
    let Ok(Some(hero)) = document.query_selector(HERO_SELECTOR) else {
        return;
    };
    if !matches!(hero.query_selector(HERO_MARKER_SELECTOR), Ok(Some(_))) {
        return;
    }

    _ = hero.class_list().add_1("home-hero-cyber");
    if dom::prefers_reduced_motion() {
        return;
    }

    let Ok(canvas_el) = document.create_element("canvas") else {
        return;
    };
    canvas_el.set_class_name("home-dataflow-canvas");
    let Ok(canvas) = canvas_el.dyn_into::<web::HtmlCanvasElement>() else {
        return;
    };
    if hero.append_child(&canvas).is_err() {
        return;
    }

    RainLoop::start(&hero, &canvas, HERO_RAIN, true).forget();
}

fn init_card_glow(document: &web::Document) {
    if !dom::has_fine_pointer() || dom::prefers_reduced_motion() {
        return;
    }
    let Ok(cards) = document.query_selector_all(CARD_SELECTOR) else {
        return;
    };

    for i in 0..cards.length() {
        let Some(card) = cards
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };

        let card_for_move = card.clone();
        dom::forget_listener(&card, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let p = dom::pointer_percent(ev, &card_for_move);
            let style = card_for_move.style();
            _ = style.set_property("--pointer-x", &format!("{:.2}%", p.x));
            _ = style.set_property("--pointer-y", &format!("{:.2}%", p.y));
        });

        let card_for_leave = card.clone();
        dom::forget_listener(&card, "pointerleave", move |_| {
            let style = card_for_leave.style();
            _ = style.set_property("--pointer-x", "50%");
            _ = style.set_property("--pointer-y", "50%");
        });
    }
}
