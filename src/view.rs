use crate::constants::{BLOB_ID_PREFIX, ID_NAV, ID_PROGRESS_BAR, ID_THEME_TOGGLE};
use crate::core::{Palette, Theme, VisualOutput};
use crate::dom::{self, set_style};
use web_sys as web;

/// Handles to every element the frame loop writes to.
pub struct PageView {
    root: web::HtmlElement,
    nav: Option<web::HtmlElement>,
    progress_bar: web::HtmlElement,
    toggle: web::HtmlElement,
    blobs: Vec<web::HtmlElement>,
    sections: Vec<web::HtmlElement>,
    applied_theme: Option<Theme>,
}

impl PageView {
    pub fn new(
        document: &web::Document,
        blob_count: usize,
        sections: Vec<web::HtmlElement>,
    ) -> anyhow::Result<Self> {
        let root = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let blobs = (0..blob_count)
            .filter_map(|i| dom::element_by_id(document, &format!("{BLOB_ID_PREFIX}{i}")).ok())
            .collect::<Vec<_>>();
        if blobs.len() != blob_count {
            log::warn!("[view] found {} of {} parallax blobs", blobs.len(), blob_count);
        }
        Ok(Self {
            root,
            nav: dom::element_by_id(document, ID_NAV).ok(),
            progress_bar: dom::element_by_id(document, ID_PROGRESS_BAR)?,
            toggle: dom::element_by_id(document, ID_THEME_TOGGLE)?,
            blobs,
            sections,
            applied_theme: None,
        })
    }

    pub fn apply(&mut self, out: &VisualOutput) {
        if self.applied_theme != Some(out.theme) {
            self.apply_theme(out.theme, &out.palette, out.toggle_label);
            self.applied_theme = Some(out.theme);
        }

        set_style(
            &self.progress_bar,
            "transform",
            &format!("scaleX({:.4})", out.progress_scale_x),
        );

        for (el, blob) in self.blobs.iter().zip(&out.blobs) {
            set_style(
                el,
                "transform",
                &format!(
                    "translate3d({:.1}px, {:.1}px, 0) scale({:.3})",
                    blob.offset.x, blob.offset.y, blob.scale
                ),
            );
        }

        for (el, s) in self.sections.iter().zip(&out.sections) {
            set_style(el, "opacity", &format!("{:.3}", s.opacity));
            set_style(el, "transform", &format!("translateY({:.1}px)", s.translate_y));
        }
    }

    fn apply_theme(&self, theme: Theme, palette: &Palette, toggle_label: &str) {
        let cl = self.root.class_list();
        _ = cl.remove_2(Theme::Dark.class_name(), Theme::Light.class_name());
        _ = cl.add_1(theme.class_name());

        set_style(&self.root, "background-color", &palette.background.css());
        set_style(&self.root, "color", &palette.text.css());
        set_style(&self.root, "--muted", &palette.muted.css());
        set_style(&self.root, "--border", &palette.border.css());
        set_style(&self.progress_bar, "background-color", &palette.progress_fill.css());
        if let Some(nav) = &self.nav {
            set_style(nav, "background-color", &palette.nav_background.css());
            set_style(nav, "border-bottom-color", &palette.border.css());
        }
        for el in &self.blobs {
            set_style(el, "background-color", &palette.blob_tint.css());
        }
        self.toggle.set_text_content(Some(toggle_label));
    }
}
