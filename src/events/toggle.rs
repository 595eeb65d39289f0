use crate::constants::ID_THEME_TOGGLE;
use crate::core::ViewController;
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_theme_toggle(
    document: &web::Document,
    controller: Rc<RefCell<ViewController>>,
) -> anyhow::Result<Listener> {
    let button = dom::element_by_id(document, ID_THEME_TOGGLE)?;
    Listener::new(&button, "click", false, move |ev: web::Event| {
        controller.borrow_mut().toggle_theme();
        ev.prevent_default();
    })
}
