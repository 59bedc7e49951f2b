//! Welcome gate: splash overlay lifecycle and its effects.
//!
//! The gate only opens when the server-rendered markup left the pending
//! class on the document root; the script never decides that on its own.

mod burn;
mod button;
mod webgl;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::*;
use crate::core::query;
use crate::core::rain::GATE_RAIN;
use crate::core::state::GateMachine;
use crate::dom;
use crate::rain::RainLoop;

// Shaders bundled as string constants
pub static BURN_VERT_GLSL: &str = include_str!("../../shaders/burn.vert.glsl");
pub static BURN_FRAG_GLSL: &str = include_str!("../../shaders/burn.frag.glsl");
pub static BUTTON_VERT_GLSL: &str = include_str!("../../shaders/button.vert.glsl");
pub static BUTTON_FRAG_GLSL: &str = include_str!("../../shaders/button.frag.glsl");

// Inner markup of the overlay; class names are the stylesheet contract.
const GATE_MARKUP: &str = r#"
      <canvas class="welcome-gate__canvas" aria-hidden="true"></canvas>
      <div class="welcome-gate__overlay" aria-hidden="true"></div>
      <canvas class="welcome-gate__burn" aria-hidden="true"></canvas>
      <div class="welcome-gate__panel">
        <p class="welcome-gate__kicker">Data Flow Protocol</p>
        <h1 class="welcome-gate__title">
          <span>DAYDREAM</span>
          <span>NATION</span>
        </h1>
        <p class="welcome-gate__desc" aria-hidden="true">&nbsp;</p>
        <button class="welcome-gate__button" type="button" aria-label="Noise Button">
          <canvas class="welcome-gate__button-canvas" aria-hidden="true"></canvas>
          <span class="welcome-gate__button-label">Noise Button</span>
        </button>
      </div>
    "#;

struct GateCtx {
    root: web::Element,
    gate: web::Element,
    body: web::HtmlElement,
    prior_overflow: String,
    reduce_motion: bool,
    machine: RefCell<GateMachine>,
    rain: RefCell<Option<RainLoop>>,
    button_fx: RefCell<Option<button::ButtonFx>>,
    burn: RefCell<Option<burn::BurnReveal>>,
    timer: RefCell<Option<dom::TimeoutHandle>>,
    listeners: RefCell<Vec<dom::EventHandle>>,
}

/// Open the gate when the server-rendered markup asked for it.
pub fn boot(document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    if !root.class_list().contains(GATE_PENDING_CLASS) {
        return;
    }

    let Some(gate) = build_gate(document) else {
        // An earlier instance already owns the overlay.
        _ = root.class_list().remove_1(GATE_PENDING_CLASS);
        return;
    };
    let Some(body) = document.body() else { return };

    let reduce_motion = dom::prefers_reduced_motion();

    _ = root.class_list().add_1(GATE_OPEN_CLASS);
    let prior_overflow = body
        .style()
        .get_property_value("overflow")
        .unwrap_or_default();
    _ = body.style().set_property("overflow", "hidden");

    let mut machine = GateMachine::new();
    machine.open();

    let rain = if reduce_motion {
        None
    } else {
        start_gate_rain(&gate)
    };

    let button_el = gate
        .query_selector(".welcome-gate__button")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let button_fx = button_el
        .as_ref()
        .map(|b| button::ButtonFx::start(b, reduce_motion));

    let ctx = Rc::new(GateCtx {
        root,
        gate,
        body,
        prior_overflow,
        reduce_motion,
        machine: RefCell::new(machine),
        rain: RefCell::new(rain),
        button_fx: RefCell::new(button_fx),
        burn: RefCell::new(None),
        timer: RefCell::new(None),
        listeners: RefCell::new(Vec::new()),
    });

    let mut listeners = Vec::new();
    if let Some(button) = button_el {
        let ctx_for_click = ctx.clone();
        listeners.push(dom::EventHandle::listen(&button, "click", move |_| {
            enter(&ctx_for_click)
        }));
    }
    if let Some(window) = web::window() {
        let ctx_for_key = ctx.clone();
        listeners.push(dom::EventHandle::listen(&window, "keydown", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            if ev.key() == "Enter" {
                enter(&ctx_for_key);
            }
        }));
    }
    *ctx.listeners.borrow_mut() = listeners;
}

fn build_gate(document: &web::Document) -> Option<web::Element> {
    if document.get_element_by_id(GATE_ID).is_some() {
        return None;
    }
    let gate = document.create_element("section").ok()?;
    gate.set_id(GATE_ID);
    gate.set_class_name("welcome-gate");
    _ = gate.set_attribute("aria-label", "Welcome Gate");
    gate.set_inner_html(GATE_MARKUP);
    document.body()?.append_child(&gate).ok()?;
    Some(gate)
}

fn start_gate_rain(gate: &web::Element) -> Option<RainLoop> {
    let canvas = gate
        .query_selector(".welcome-gate__canvas")
        .ok()
        .flatten()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    Some(RainLoop::start(gate, &canvas, GATE_RAIN, false))
}

/// Begin the burn transition. Guarded single-fire: a second click or Enter
/// while burning is ignored.
fn enter(ctx: &Rc<GateCtx>) {
    if !ctx.machine.borrow_mut().begin_burn() {
        return;
    }
    _ = ctx.gate.class_list().add_1("is-burning");

    if ctx.reduce_motion {
        close(ctx);
        return;
    }

    let reveal = burn::BurnReveal::start(&ctx.gate, BURN_DURATION_MS);
    let delay = if reveal.active() {
        reveal.duration_ms() + CLOSE_BUFFER_MS
    } else {
        CLOSE_FALLBACK_MS
    };
    *ctx.burn.borrow_mut() = Some(reveal);

    let ctx_for_timer = ctx.clone();
    *ctx.timer.borrow_mut() = Some(dom::TimeoutHandle::once(delay, move || {
        close(&ctx_for_timer)
    }));
}

/// Tear the gate down. Idempotent: every exit path funnels here once.
fn close(ctx: &Rc<GateCtx>) {
    if !ctx.machine.borrow_mut().close() {
        return;
    }

    if let Some(timer) = ctx.timer.borrow_mut().take() {
        timer.clear();
    }
    if let Some(reveal) = ctx.burn.borrow_mut().take() {
        reveal.stop();
    }
    if let Some(rain) = ctx.rain.borrow_mut().take() {
        rain.stop();
    }
    if let Some(fx) = ctx.button_fx.borrow_mut().take() {
        fx.stop();
    }

    let classes = ctx.root.class_list();
    _ = classes.remove_1(GATE_OPEN_CLASS);
    _ = classes.remove_1(GATE_PENDING_CLASS);
    ctx.gate.remove();

    let style = ctx.body.style();
    if ctx.prior_overflow.is_empty() {
        _ = style.remove_property("overflow");
    } else {
        _ = style.set_property("overflow", &ctx.prior_overflow);
    }

    clear_welcome_query();
    ctx.listeners.borrow_mut().clear();
}

/// Strip the welcome flag from the address without adding a history entry,
/// keeping the other query parameters and the current history state.
fn clear_welcome_query() {
    let Some(window) = web::window() else { return };
    let location = window.location();
    let Ok(search) = location.search() else { return };
    if !query::has_param(&search, WELCOME_PARAM) {
        return;
    }
    let next_query = query::remove_param(&search, WELCOME_PARAM);
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    let hash = location.hash().unwrap_or_default();
    let next = query::compose_href(&pathname, &next_query, &hash);

    let Ok(history) = window.history() else { return };
    let state = history.state().unwrap_or(JsValue::NULL);
    _ = history.replace_state_with_url(&state, "", Some(&next));
}
