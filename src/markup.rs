//! Builds the catalog-driven parts of the page into the static shell.

use crate::constants::*;
use crate::core::catalog::{
    nav_links, ProjectRecord, Side, CONTACT_EMAIL, CONTACT_LINKS, CONTACT_PHONE, OWNER_NAME,
    PROFILE_IMAGE,
};
use crate::dom;
use anyhow::anyhow;
use web_sys as web;

fn external_link(
    document: &web::Document,
    label: &str,
    href: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let a = dom::create_element(document, "a", class)?;
    a.set_text_content(Some(label));
    a.set_attribute("href", href)
        .and_then(|_| a.set_attribute("target", "_blank"))
        .and_then(|_| a.set_attribute("rel", "noopener noreferrer"))
        .map_err(|e| anyhow!("link attributes: {:?}", e))?;
    Ok(a)
}

fn project_image(
    document: &web::Document,
    project: &ProjectRecord,
) -> anyhow::Result<web::HtmlElement> {
    let img = dom::create_element(document, "img", "project-image")?;
    img.set_attribute("src", project.image_ref)
        .and_then(|_| img.set_attribute("alt", project.title))
        .map_err(|e| anyhow!("img attributes: {:?}", e))?;
    Ok(img)
}

fn project_card(
    document: &web::Document,
    index: usize,
    project: &ProjectRecord,
) -> anyhow::Result<web::HtmlElement> {
    let side = Side::for_index(index);
    let side_class = match side {
        Side::Left => CLASS_IMAGE_LEFT,
        Side::Right => CLASS_IMAGE_RIGHT,
    };
    let class = format!("{CLASS_PROJECT} {side_class}");
    let card = dom::create_element(document, "article", &class)?;
    _ = card.set_attribute("id", &format!("project-{index}"));

    let body = dom::create_element(document, "div", "project-body")?;
    let title = dom::create_element(document, "h3", "project-title")?;
    title.set_text_content(Some(project.title));
    dom::append(&body, &title)?;

    let desc = dom::create_element(document, "p", "project-description")?;
    desc.set_text_content(Some(project.description));
    dom::append(&body, &desc)?;

    let tags = dom::create_element(document, "ul", "project-tags")?;
    for tag in project.tags.iter().copied() {
        let li = dom::create_element(document, "li", "tag")?;
        li.set_text_content(Some(tag));
        dom::append(&tags, &li)?;
    }
    dom::append(&body, &tags)?;

    let links = dom::create_element(document, "div", "project-links")?;
    let repo = external_link(document, "GitHub", project.repo_url, "btn btn-outline")?;
    let live = external_link(document, "Live", project.live_url, "btn btn-solid")?;
    dom::append(&links, &repo)?;
    dom::append(&links, &live)?;
    dom::append(&body, &links)?;

    let image = project_image(document, project)?;
    match side {
        Side::Left => {
            dom::append(&card, &image)?;
            dom::append(&card, &body)?;
        }
        Side::Right => {
            dom::append(&card, &body)?;
            dom::append(&card, &image)?;
        }
    }
    Ok(card)
}

/// Replace the contents of the work list with one card per project.
pub fn build_projects(
    document: &web::Document,
    catalog: &[ProjectRecord],
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = dom::element_by_id(document, ID_WORK_LIST)?;
    list.set_inner_html("");
    catalog
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let card = project_card(document, i, project)?;
            dom::append(&list, &card)?;
            Ok(card)
        })
        .collect()
}

pub fn build_nav(document: &web::Document) -> anyhow::Result<()> {
    let nav = dom::element_by_id(document, ID_NAV_LINKS)?;
    nav.set_inner_html("");
    for link in nav_links() {
        let a = if link.href.starts_with('#') {
            let a = dom::create_element(document, "a", "nav-link")?;
            a.set_text_content(Some(link.label));
            _ = a.set_attribute("href", link.href);
            a
        } else {
            external_link(document, link.label, link.href, "nav-link")?
        };
        dom::append(&nav, &a)?;
    }
    Ok(())
}

pub fn build_contact(document: &web::Document) -> anyhow::Result<()> {
    dom::element_by_id(document, ID_CONTACT_EMAIL)?
        .set_text_content(Some(&format!("Email: {CONTACT_EMAIL}")));
    dom::element_by_id(document, ID_CONTACT_PHONE)?
        .set_text_content(Some(&format!("Phone: {CONTACT_PHONE}")));
    let links = dom::element_by_id(document, ID_CONTACT_LINKS)?;
    links.set_inner_html("");
    for link in CONTACT_LINKS {
        let a = external_link(document, link.label, link.href, "contact-link")?;
        dom::append(&links, &a)?;
    }
    Ok(())
}

pub fn build_chrome(document: &web::Document) -> anyhow::Result<()> {
    if let Ok(img) = dom::element_by_id(document, ID_PROFILE_IMAGE) {
        _ = img.set_attribute("src", PROFILE_IMAGE);
    }
    let year = js_sys::Date::new_0().get_full_year();
    dom::element_by_id(document, ID_FOOTER)?
        .set_text_content(Some(&format!("© {year} {OWNER_NAME}")));
    Ok(())
}
