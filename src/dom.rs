use wasm_bindgen::JsCast;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Append a `<div>` to `parent`, optionally with a class.
pub fn append_div(
    document: &web::Document,
    parent: &web::Element,
    class: Option<&str>,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("div is not an HtmlElement: {:?}", e))?;
    if let Some(class) = class {
        el.set_class_name(class);
    }
    parent.append_child(&el).map_err(js_err)?;
    Ok(el)
}

/// First descendant of `parent` matching `selector`.
pub fn select_html(parent: &web::Element, selector: &str) -> anyhow::Result<web::HtmlElement> {
    parent
        .query_selector(selector)
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("no element matches {}", selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{} is not an HtmlElement: {:?}", selector, e))
}

/// Append an SVG-namespaced child with the given attributes.
pub fn append_svg(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    attrs: &[(&str, &str)],
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(js_err)?;
    for (name, value) in attrs {
        el.set_attribute(name, value).map_err(js_err)?;
    }
    parent.append_child(&el).map_err(js_err)?;
    Ok(el)
}

/// Current page URL, used to resolve fragment references like `url(#id)`.
pub fn page_href() -> String {
    web::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}
