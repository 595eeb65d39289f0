//! Portfolio page front-end.
//!
//! `core` holds the platform-independent view state (theme, scroll progress,
//! spring smoothing, reveal triggers, composition) and builds on every
//! target. The rest is browser wiring and only builds for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod loader;
#[cfg(target_arch = "wasm32")]
mod markup;
#[cfg(target_arch = "wasm32")]
mod session;
#[cfg(target_arch = "wasm32")]
mod view;

#[cfg(target_arch = "wasm32")]
pub use wasm::start;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::dom::{self, Listener};
    use crate::session::{self, Session};
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    thread_local! {
        static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
        // pagehide/pageshow hooks live as long as the document
        static LIFECYCLE: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
    }

    fn mount_session() -> anyhow::Result<()> {
        if SESSION.with(|s| s.borrow().is_some()) {
            return Ok(());
        }
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let session = session::mount(&window, &document)?;
        SESSION.with(|s| *s.borrow_mut() = Some(session));
        Ok(())
    }

    fn teardown_session() {
        // take first so the RefCell is released before listeners are removed
        let session = SESSION.with(|s| s.borrow_mut().take());
        drop(session);
    }

    fn wire_lifecycle(window: &web::Window) -> anyhow::Result<()> {
        let hide = Listener::new(window, "pagehide", false, |_ev: web::Event| {
            teardown_session();
        })?;
        let show = Listener::new(window, "pageshow", false, |_ev: web::Event| {
            if let Err(e) = mount_session() {
                log::error!("remount error: {:?}", e);
            }
        })?;
        LIFECYCLE.with(|l| l.borrow_mut().extend([hide, show]));
        Ok(())
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("folio-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        if dom::window_document().is_none() {
            anyhow::bail!("no document");
        }
        wire_lifecycle(&window)?;
        mount_session()
    }
}
