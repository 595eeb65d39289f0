use crate::core::{Rect, ViewController};
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Read the current geometry and section boxes and feed them to the
/// controller. Returns the number of sections revealed by this call.
pub fn sync_layout(
    window: &web::Window,
    controller: &Rc<RefCell<ViewController>>,
    sections: &[web::HtmlElement],
) -> usize {
    let Some(geometry) = dom::viewport_geometry(window) else {
        log::debug!("[layout] geometry unavailable");
        return 0;
    };
    let bounds: Vec<Rect> = sections.iter().map(|el| dom::client_rect(el)).collect();
    controller.borrow_mut().on_layout(geometry, &bounds).len()
}

/// Passive `scroll` and `resize` listeners on the window.
pub fn wire_layout_listeners(
    window: &web::Window,
    controller: Rc<RefCell<ViewController>>,
    sections: Rc<Vec<web::HtmlElement>>,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(2);
    for event in ["scroll", "resize"] {
        let win = window.clone();
        let controller = controller.clone();
        let sections = sections.clone();
        listeners.push(Listener::new(window, event, true, move |_ev: web::Event| {
            sync_layout(&win, &controller, &sections);
        })?);
    }
    Ok(listeners)
}
