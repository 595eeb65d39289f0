//! One page view's worth of listeners, timers and the frame loop.

use crate::constants::{ID_ABOUT, ID_CONTACT};
use crate::core::{ControllerConfig, ViewController, PROJECTS};
use crate::dom::{self, Listener, Timeout};
use crate::events;
use crate::frame::{self, FrameContext, FrameLoop};
use crate::loader;
use crate::markup;
use crate::view::PageView;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Everything registered with the host for the current page view. Field
/// order is drop order: listeners go first so no handler runs against a
/// stopped loop.
pub struct Session {
    _listeners: Vec<Listener>,
    _frame_loop: FrameLoop,
    _loader_timer: Option<Timeout>,
    controller: Rc<RefCell<ViewController>>,
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Ok(c) = self.controller.try_borrow() {
            log::info!(
                "[session] torn down (theme={:?}, progress={:.2})",
                c.theme(),
                c.scroll_progress()
            );
        }
    }
}

/// Build the page and wire every handler. Any error drops what was
/// acquired so far, which unregisters it.
pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Session> {
    let loader_timer = loader::schedule_hide(window, document)?;

    markup::build_nav(document)?;
    markup::build_contact(document)?;
    markup::build_chrome(document)?;
    let cards = markup::build_projects(document, PROJECTS)?;

    let controller = Rc::new(RefCell::new(ViewController::new(ControllerConfig::default())));

    // Project cards stagger by position; standalone sections enter at once.
    let mut sections = Vec::with_capacity(cards.len() + 2);
    for (i, card) in cards.into_iter().enumerate() {
        controller.borrow_mut().track_section(i as u32);
        sections.push(card);
    }
    for id in [ID_ABOUT, ID_CONTACT] {
        sections.push(dom::element_by_id(document, id)?);
        controller.borrow_mut().track_section(0);
    }
    let sections = Rc::new(sections);

    let dirty = Rc::new(Cell::new(true));
    {
        // entrance styles are written inline by the view, so any change just
        // wakes the frame loop
        let dirty = dirty.clone();
        controller.borrow_mut().subscribe(move |_| dirty.set(true));
    }

    let blob_count = controller.borrow().config().blob_depths.len();
    let view = PageView::new(document, blob_count, sections.to_vec())?;

    let mut listeners =
        events::wire_layout_listeners(window, controller.clone(), sections.clone())?;
    listeners.push(events::wire_theme_toggle(document, controller.clone())?);

    // sections already on screen at load reveal without waiting for a scroll
    let initial = events::sync_layout(window, &controller, &sections);
    log::info!(
        "[session] mounted: {} sections tracked, {} visible at load",
        sections.len(),
        initial
    );

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        controller: controller.clone(),
        view,
        catalog: PROJECTS,
        dirty,
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    Ok(Session {
        _listeners: listeners,
        _frame_loop: frame_loop,
        _loader_timer: loader_timer,
        controller,
    })
}
