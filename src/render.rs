use crate::core::constants::BACKGROUND_FILL;
use crate::core::markup;
use crate::core::{ArcDatum, ChartAttributes};
use crate::dom;
use web_sys as web;

/// Tear down whatever is in `chart_element` and build the gauge SVG.
///
/// Returns the clip-path `<path>`; its `d` attribute is what the transition
/// animates.
pub fn draw_chart(
    document: &web::Document,
    chart_element: &web::HtmlElement,
    attrs: &ChartAttributes,
    clip_id: &str,
    clip_datum: &ArcDatum,
) -> anyhow::Result<web::Element> {
    chart_element.set_inner_html("");

    let width = attrs.width.to_string();
    let height = attrs.height.to_string();
    let svg = dom::append_svg(
        document,
        chart_element,
        "svg",
        &[("width", width.as_str()), ("height", height.as_str())],
    )?;
    let chart = dom::append_svg(document, &svg, "g", &[("transform", attrs.translate().as_str())])?;

    let gauge_arc = attrs.gauge_arc();

    // Background ring
    let background = gauge_arc.path(&attrs.background_datum());
    let background_style = format!("fill: {}", BACKGROUND_FILL);
    dom::append_svg(
        document,
        &chart,
        "path",
        &[("style", background_style.as_str()), ("d", background.as_str())],
    )?;

    // Gradient slices, clipped to the progress arc
    let clip_url = markup::clip_path_url(&dom::page_href(), clip_id);
    let gradient_group = dom::append_svg(document, &chart, "g", &[("clip-path", clip_url.as_str())])?;
    let slice_arc = attrs.slice_arc();
    for slice in attrs.gradient_slices() {
        let d = slice_arc.path(&slice.datum);
        let style = format!("fill: {}", slice.fill);
        dom::append_svg(
            document,
            &gradient_group,
            "path",
            &[("class", "piece"), ("d", d.as_str()), ("style", style.as_str())],
        )?;
    }

    let defs = dom::append_svg(document, &chart, "defs", &[])?;
    let clip = dom::append_svg(document, &defs, "clipPath", &[("id", clip_id)])?;
    let clip_path = dom::append_svg(
        document,
        &clip,
        "path",
        &[("d", gauge_arc.path(clip_datum).as_str())],
    )?;

    log::debug!(
        "[render] width={} perimeter={:.4} radius=({}, {}) slices={}",
        attrs.width,
        attrs.perimeter,
        attrs.radius.inner,
        attrs.radius.outer,
        gradient_group.child_element_count()
    );
    Ok(clip_path)
}
