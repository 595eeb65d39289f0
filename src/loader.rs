use crate::constants::{CLASS_HIDDEN, ID_LOADER};
use crate::core::constants::LOADER_DURATION_MS;
use crate::dom::Timeout;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ID_LOADER) {
        _ = el.class_list().add_1(CLASS_HIDDEN);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    match document.get_element_by_id(ID_LOADER) {
        Some(el) => {
            el.class_list().contains(CLASS_HIDDEN)
                || el
                    .get_attribute("style")
                    .is_some_and(|s| s.contains("display:none"))
        }
        None => true,
    }
}

/// Hide the splash after the loader delay. Dropping the returned timer
/// before it fires leaves the splash as it is.
pub fn schedule_hide(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Option<Timeout>> {
    if is_hidden(document) {
        return Ok(None);
    }
    let doc = document.clone();
    let timer = Timeout::new(window, LOADER_DURATION_MS, move || {
        hide(&doc);
        log::debug!("[loader] hidden");
    })?;
    Ok(Some(timer))
}
