//! Canvas glyph rain shared by the hero backdrop and the gate.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::{thread_rng, Rng};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::RAIN_FONT_FAMILY;
use crate::core::rain::{RainField, RainParams};
use crate::dom;
use crate::frame::FrameLoop;

pub struct RainLoop {
    frame: Option<FrameLoop>,
    listeners: Vec<dom::EventHandle>,
}

impl RainLoop {
    /// Inactive handle for surfaces without a usable 2D context.
    fn inactive() -> Self {
        Self {
            frame: None,
            listeners: Vec::new(),
        }
    }

    /// Run the rain over `canvas`, sized to `host`'s box. With
    /// `pause_when_hidden` the loop idles while the document is hidden.
    pub fn start(
        host: &web::Element,
        canvas: &web::HtmlCanvasElement,
        params: RainParams,
        pause_when_hidden: bool,
    ) -> Self {
        let Some(ctx) = context_2d(canvas) else {
            log::debug!("rain: no 2d context, skipping");
            return Self::inactive();
        };

        let field: Rc<RefCell<Option<RainField>>> = Rc::new(RefCell::new(None));
        let size = Rc::new(Cell::new(glam::Vec2::ONE));

        // (Re)match the backing store to the host box and reseed the columns.
        let setup = {
            let host = host.clone();
            let canvas = canvas.clone();
            let ctx = ctx.clone();
            let field = field.clone();
            let size = size.clone();
            move || {
                let css = dom::css_size(&host);
                let dpr = dom::size_canvas(&canvas, css);
                _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
                let seed = thread_rng().gen::<u64>();
                *field.borrow_mut() = Some(RainField::new(css.x, css.y, &params, seed));
                size.set(css);
                ctx.set_fill_style_str(params.settle_fill);
                ctx.fill_rect(0.0, 0.0, css.x as f64, css.y as f64);
            }
        };
        setup();

        let last_tick = Cell::new(0.0f64);
        let frame = FrameLoop::start({
            let ctx = ctx.clone();
            let field = field.clone();
            let size = size.clone();
            move |timestamp| {
                if timestamp - last_tick.get() < params.min_frame_ms {
                    return true;
                }
                last_tick.set(timestamp);

                let css = size.get();
                ctx.set_fill_style_str(params.trail_fill);
                ctx.fill_rect(0.0, 0.0, css.x as f64, css.y as f64);

                let mut slot = field.borrow_mut();
                let Some(field) = slot.as_mut() else {
                    return true;
                };
                ctx.set_font(&format!("{}px {}", field.font_size(), RAIN_FONT_FAMILY));
                for glyph in field.step(css.y, &params) {
                    ctx.set_fill_style_str(&format!(
                        "rgba({}, {:.3})",
                        params.glyph_rgb, glyph.alpha
                    ));
                    _ = ctx.fill_text(&glyph.ch.to_string(), glyph.x as f64, glyph.y as f64);
                }
                true
            }
        });

        let mut listeners = Vec::new();
        if let Some(window) = web::window() {
            listeners.push(dom::EventHandle::listen(&window, "resize", move |_| setup()));
        }
        if pause_when_hidden {
            if let Some(document) = dom::window_document() {
                let frame = frame.clone();
                let doc_for_vis = document.clone();
                listeners.push(dom::EventHandle::listen(
                    &document,
                    "visibilitychange",
                    move |_| {
                        if doc_for_vis.hidden() {
                            frame.pause();
                        } else {
                            frame.resume();
                        }
                    },
                ));
            }
        }

        Self {
            frame: Some(frame),
            listeners,
        }
    }

    /// Release the loop and its listeners.
    pub fn stop(self) {
        if let Some(frame) = self.frame {
            frame.cancel();
        }
    }

    /// Keep the loop and its listeners alive for the page lifetime.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|o| o.dyn_into().ok())
}
