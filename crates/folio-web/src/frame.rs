use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Closure<dyn FnMut()>;

/// requestAnimationFrame loop that can be cancelled. Each frame calls
/// `on_frame(dt_sec)` and schedules the next one.
#[derive(Default)]
pub struct FrameLoop {
    tick: Rc<RefCell<Option<TickClosure>>>,
    handle: Rc<Cell<Option<i32>>>,
}

fn request(tick: &Rc<RefCell<Option<TickClosure>>>) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

impl FrameLoop {
    pub fn start(&mut self, mut on_frame: impl FnMut(f32) + 'static) {
        if self.is_running() {
            return;
        }
        let tick_next = self.tick.clone();
        let handle = self.handle.clone();
        let mut last_instant = Instant::now();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let now = Instant::now();
            let dt = now - last_instant;
            last_instant = now;
            on_frame(dt.as_secs_f32());
            handle.set(request(&tick_next));
        }) as Box<dyn FnMut()>));
        self.handle.set(request(&self.tick));
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }

    /// Cancel the pending frame and drop the callback (which also breaks the
    /// closure's reference to itself).
    pub fn stop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
