//! Shader-driven noise button.
//!
//! While the gate is open the button idles on a resting parameter set and
//! eases toward an active set on press. Under reduced motion no loop runs;
//! press, release, and resize each draw a single frame instead.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use super::webgl::{ContextOptions, FxProgram};
use crate::constants::*;
use crate::core::anim::{
    ButtonParams, BUTTON_ACTIVE, BUTTON_PRESS_EASE_SEC, BUTTON_RELEASE_EASE_SEC, BUTTON_RESTING,
};
use crate::dom;
use crate::frame::FrameLoop;

struct ButtonUniforms {
    resolution: Option<web::WebGlUniformLocation>,
    time: Option<web::WebGlUniformLocation>,
    tap: Option<web::WebGlUniformLocation>,
    speed: Option<web::WebGlUniformLocation>,
    amplitude: Option<web::WebGlUniformLocation>,
    pulse_min: Option<web::WebGlUniformLocation>,
    pulse_max: Option<web::WebGlUniformLocation>,
    noise_type: Option<web::WebGlUniformLocation>,
}

struct FxState {
    current: ButtonParams,
    target: ButtonParams,
    ease_sec: f32,
    phase: f32,
    last_sec: Option<f64>,
}

pub struct ButtonFx {
    button: web::HtmlElement,
    frame: Option<FrameLoop>,
    listeners: Vec<dom::EventHandle>,
    program: Option<FxProgram>,
}

impl ButtonFx {
    fn inactive(button: &web::HtmlElement) -> Self {
        Self {
            button: button.clone(),
            frame: None,
            listeners: Vec::new(),
            program: None,
        }
    }

    pub fn start(button: &web::HtmlElement, reduce_motion: bool) -> Self {
        let Some(canvas) = button
            .query_selector(".welcome-gate__button-canvas")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            return Self::inactive(button);
        };

        let Some(program) = FxProgram::new(
            &canvas,
            ContextOptions {
                alpha: false,
                antialias: true,
                premultiplied_alpha: true,
            },
            super::BUTTON_VERT_GLSL,
            super::BUTTON_FRAG_GLSL,
        ) else {
            log::debug!("button fx: WebGL unavailable");
            return Self::inactive(button);
        };

        let uniforms = Rc::new(ButtonUniforms {
            resolution: program.uniform("u_resolution"),
            time: program.uniform("u_time"),
            tap: program.uniform("u_tap"),
            speed: program.uniform("u_speed"),
            amplitude: program.uniform("u_amplitude"),
            pulse_min: program.uniform("u_pulseMin"),
            pulse_max: program.uniform("u_pulseMax"),
            noise_type: program.uniform("u_noiseType"),
        });
        let state = Rc::new(RefCell::new(FxState {
            current: BUTTON_RESTING,
            target: BUTTON_RESTING,
            ease_sec: BUTTON_RELEASE_EASE_SEC,
            phase: 0.0,
            last_sec: None,
        }));

        let gl = program.gl().clone();

        // One simulation step plus draw, shared by the loop and the static
        // reduced-motion paths.
        let draw_frame = {
            let gl = gl.clone();
            let program = program.clone();
            let canvas = canvas.clone();
            let uniforms = uniforms.clone();
            let state = state.clone();
            move |delta: f32| {
                let mut s = state.borrow_mut();
                let target = s.target;
                let ease = s.ease_sec;
                s.current.approach_toward(&target, ease, delta);
                s.phase += delta * s.current.speed;
                if s.phase > BUTTON_PHASE_WRAP {
                    s.phase %= BUTTON_PHASE_WRAP;
                }

                program.bind();
                gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);
                gl.uniform2f(
                    uniforms.resolution.as_ref(),
                    canvas.width() as f32,
                    canvas.height() as f32,
                );
                gl.uniform1f(uniforms.time.as_ref(), s.phase);
                gl.uniform1f(uniforms.tap.as_ref(), s.current.tap);
                gl.uniform1f(uniforms.speed.as_ref(), 1.0);
                gl.uniform1f(uniforms.amplitude.as_ref(), s.current.amplitude);
                gl.uniform1f(uniforms.pulse_min.as_ref(), s.current.pulse_min);
                gl.uniform1f(uniforms.pulse_max.as_ref(), s.current.pulse_max);
                gl.uniform1f(uniforms.noise_type.as_ref(), BUTTON_NOISE_TYPE);
                program.draw();
            }
        };

        let resize = {
            let button = button.clone();
            let canvas = canvas.clone();
            move || {
                let rect = button.get_bounding_client_rect();
                let w = (rect.width() - BUTTON_CANVAS_INSET_PX).floor().max(1.0);
                let h = (rect.height() - BUTTON_CANVAS_INSET_PX).floor().max(1.0);
                dom::size_canvas(&canvas, glam::Vec2::new(w as f32, h as f32));
            }
        };
        resize();
        draw_frame(BUTTON_STATIC_DELTA_SEC);

        let frame = if reduce_motion {
            None
        } else {
            let draw_frame = draw_frame.clone();
            let state = state.clone();
            Some(FrameLoop::start(move |timestamp| {
                let now_sec = timestamp / 1000.0;
                let delta = {
                    let mut s = state.borrow_mut();
                    let last = s.last_sec.replace(now_sec).unwrap_or(now_sec);
                    ((now_sec - last) as f32).clamp(BUTTON_DELTA_MIN_SEC, BUTTON_DELTA_MAX_SEC)
                };
                draw_frame(delta);
                true
            }))
        };

        let activate = {
            let button = button.clone();
            let state = state.clone();
            let draw_frame = draw_frame.clone();
            move || {
                _ = button.class_list().add_1("is-pressed");
                {
                    let mut s = state.borrow_mut();
                    s.target = BUTTON_ACTIVE;
                    s.ease_sec = BUTTON_PRESS_EASE_SEC;
                }
                if reduce_motion {
                    draw_frame(BUTTON_STATIC_DELTA_SEC);
                }
            }
        };
        let deactivate = {
            let button = button.clone();
            let state = state.clone();
            let draw_frame = draw_frame.clone();
            move || {
                _ = button.class_list().remove_1("is-pressed");
                {
                    let mut s = state.borrow_mut();
                    s.target = BUTTON_RESTING;
                    s.ease_sec = BUTTON_RELEASE_EASE_SEC;
                }
                if reduce_motion {
                    draw_frame(BUTTON_STATIC_DELTA_SEC);
                }
            }
        };

        let mut listeners = Vec::new();
        listeners.push(dom::EventHandle::listen(button, "pointerdown", {
            let activate = activate.clone();
            move |_| activate()
        }));
        for kind in ["pointerup", "pointerleave", "pointercancel", "blur"] {
            listeners.push(dom::EventHandle::listen(button, kind, {
                let deactivate = deactivate.clone();
                move |_| deactivate()
            }));
        }
        if let Some(window) = web::window() {
            listeners.push(dom::EventHandle::listen(&window, "resize", move |_| {
                resize();
                if reduce_motion {
                    draw_frame(BUTTON_STATIC_DELTA_SEC);
                }
            }));
        }

        Self {
            button: button.clone(),
            frame,
            listeners,
            program: Some(program),
        }
    }

    /// Stop the loop, unhook the button, and delete the GL objects.
    pub fn stop(self) {
        if let Some(frame) = self.frame {
            frame.cancel();
        }
        _ = self.button.class_list().remove_1("is-pressed");
        drop(self.listeners);
        if let Some(program) = self.program {
            program.release();
        }
    }
}
