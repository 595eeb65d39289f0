use crate::core::{ProjectRecord, ViewController};
use crate::view::PageView;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: Rc<RefCell<ViewController>>,
    pub view: PageView,
    pub catalog: &'static [ProjectRecord],
    /// Set by controller observers; forces a render on the next frame.
    pub dirty: Rc<Cell<bool>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let out = {
            let mut controller = self.controller.borrow_mut();
            let was_animating = controller.is_animating();
            controller.tick(dt_sec);
            if !(self.dirty.replace(false) || was_animating) {
                return;
            }
            controller.render(self.catalog)
        };
        self.view.apply(&out);
    }
}

/// Running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and releases the callback.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure -> tick cell cycle
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop stopped");
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_clone.set(None);
        frame_ctx.borrow_mut().frame();
        handle_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));

    handle.set(request_frame(&tick));
    FrameLoop { handle, tick }
}
