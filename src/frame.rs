//! requestAnimationFrame loop ownership.
//!
//! Each animated feature owns one `FrameLoop`. The tick closure keeps itself
//! alive through the shared slot, so dropping a handle leaves a page-lifetime
//! loop running; `cancel` is the explicit release.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[derive(Clone)]
pub struct FrameLoop {
    raf_id: Rc<Cell<i32>>,
    running: Rc<Cell<bool>>,
    tick: TickSlot,
}

impl FrameLoop {
    /// Drive `step` once per animation frame with the frame timestamp in
    /// milliseconds. A `false` return stops the loop for good.
    pub fn start(mut step: impl FnMut(f64) -> bool + 'static) -> Self {
        let raf_id = Rc::new(Cell::new(0));
        let running = Rc::new(Cell::new(true));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let raf_for_tick = raf_id.clone();
        let running_for_tick = running.clone();
        let slot = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if !running_for_tick.get() {
                return;
            }
            if !step(timestamp) {
                running_for_tick.set(false);
                return;
            }
            schedule(&slot, &raf_for_tick);
        }) as Box<dyn FnMut(f64)>));

        let frame = Self {
            raf_id,
            running,
            tick,
        };
        schedule(&frame.tick, &frame.raf_id);
        frame
    }

    /// Unschedule without releasing the closure; `resume` restarts.
    pub fn pause(&self) {
        if self.running.replace(false) {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(self.raf_id.get());
            }
        }
    }

    pub fn resume(&self) {
        if self.tick.borrow().is_some() && !self.running.replace(true) {
            schedule(&self.tick, &self.raf_id);
        }
    }

    /// Stop and release the closure. Safe to call more than once.
    pub fn cancel(&self) {
        self.pause();
        self.tick.borrow_mut().take();
    }
}

fn schedule(tick: &TickSlot, raf_id: &Rc<Cell<i32>>) {
    let slot = tick.borrow();
    let Some(closure) = slot.as_ref() else { return };
    if let Some(w) = web::window() {
        if let Ok(id) = w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            raf_id.set(id);
        }
    }
}
