//! requestAnimationFrame loop that can be stopped and restarted.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopInner {
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
    fn schedule(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(h) => self.handle.set(Some(h)),
                Err(e) => {
                    log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                    self.running.set(false);
                }
            }
        }
    }
}

/// Re-arms itself every frame while running. Dropping the handle stops the
/// loop.
pub struct AnimationLoop {
    inner: Rc<LoopInner>,
}

impl AnimationLoop {
    pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            running: Cell::new(false),
            handle: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if !inner.running.get() {
                return;
            }
            on_frame();
            inner.schedule();
        }) as Box<dyn FnMut()>));
        Self { inner }
    }

    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        self.inner.schedule();
    }

    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(h) = self.inner.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(h);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Run `f` once on the next animation frame. Returns false when no frame was
/// scheduled, in which case `f` never runs.
pub fn next_frame(f: impl FnOnce() + 'static) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let cb = Closure::once_into_js(f);
    match w.request_animation_frame(cb.unchecked_ref()) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("[frame] could not schedule frame: {:?}", e);
            false
        }
    }
}
