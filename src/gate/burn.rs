//! Burning-paper reveal across the full viewport.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use web_sys as web;
use web_sys::WebGlRenderingContext as GL;

use super::webgl::{ContextOptions, FxProgram};
use crate::constants::*;
use crate::core::anim;
use crate::dom;
use crate::frame::FrameLoop;

pub struct BurnReveal {
    duration_ms: f64,
    inner: Option<BurnInner>,
}

struct BurnInner {
    frame: FrameLoop,
    program: FxProgram,
    _resize: Option<dom::EventHandle>,
}

impl BurnReveal {
    fn inactive() -> Self {
        Self {
            duration_ms: 0.0,
            inner: None,
        }
    }

    pub fn active(&self) -> bool {
        self.inner.is_some()
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Animate the burn shader over the gate's dedicated canvas. An absent
    /// canvas or WebGL context yields an inactive reveal; the caller falls
    /// back to a fixed close delay.
    pub fn start(gate: &web::Element, duration_ms: f64) -> Self {
        let Some(canvas) = gate
            .query_selector(".welcome-gate__burn")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            return Self::inactive();
        };
        let duration_ms = duration_ms.max(BURN_MIN_DURATION_MS);

        let Some(program) = FxProgram::new(
            &canvas,
            ContextOptions {
                alpha: true,
                antialias: true,
                premultiplied_alpha: false,
            },
            super::BURN_VERT_GLSL,
            super::BURN_FRAG_GLSL,
        ) else {
            log::debug!("burn: WebGL unavailable, closing on fallback delay");
            return Self::inactive();
        };

        let u_resolution = program.uniform("u_resolution");
        let u_progress = program.uniform("u_progress");
        let u_time = program.uniform("u_time");

        let gl = program.gl().clone();
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.disable(GL::DEPTH_TEST);
        gl.disable(GL::CULL_FACE);

        // Full-viewport surface; the resolution uniform tracks the backing
        // store so the shader's aspect correction stays valid.
        let resize = {
            let canvas = canvas.clone();
            let gl = gl.clone();
            let program = program.clone();
            move || {
                let Some(window) = web::window() else { return };
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(1.0)
                    .floor()
                    .max(1.0);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(1.0)
                    .floor()
                    .max(1.0);
                dom::size_canvas(&canvas, glam::Vec2::new(width as f32, height as f32));
                gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);
                program.bind();
                gl.uniform2f(
                    u_resolution.as_ref(),
                    canvas.width() as f32,
                    canvas.height() as f32,
                );
            }
        };
        resize();

        let start_ts = Cell::new(None::<f64>);
        let frame = FrameLoop::start({
            let gl = gl.clone();
            let program = program.clone();
            move |timestamp| {
                let start = match start_ts.get() {
                    Some(s) => s,
                    None => {
                        start_ts.set(Some(timestamp));
                        timestamp
                    }
                };
                let normalized = (((timestamp - start) / duration_ms).clamp(0.0, 1.0)) as f32;
                let progress = anim::burn_progress(normalized, BURN_PROGRESS_FLOOR);

                program.bind();
                gl.uniform1f(u_progress.as_ref(), progress);
                gl.uniform1f(u_time.as_ref(), (timestamp * 0.001) as f32);
                program.draw();

                // No frames past completion; the close timer takes over.
                normalized < 1.0
            }
        });

        let resize_handle =
            web::window().map(|w| dom::EventHandle::listen(&w, "resize", move |_| resize()));

        Self {
            duration_ms,
            inner: Some(BurnInner {
                frame,
                program,
                _resize: resize_handle,
            }),
        }
    }

    /// Tear down the loop, listener, and GL objects. Consuming, so it runs
    /// at most once.
    pub fn stop(self) {
        if let Some(inner) = self.inner {
            inner.frame.cancel();
            drop(inner._resize);
            inner.program.release();
        }
    }
}
