use leptos::prelude::*;
use leptos::svg;

/// Renders an [`icondata`] glyph as inline SVG at a fixed pixel size.
/// Callers style it through `attr:class` spreading.
#[component]
pub fn Icon(
    /// The icon to render.
    icon: icondata_core::Icon,
    /// Rendered width and height in pixels.
    #[prop(default = 24)] size_px: u32,
    /// Decorative icons should be hidden from assistive tech.
    #[prop(optional)] aria_hidden: bool,
) -> impl IntoView {
    // Wrap the icon data in a <g> so the inert element always has a single
    // top level node.
    let mut data = String::with_capacity(icon.data.len() + 7);
    data.push_str("<g>");
    data.push_str(icon.data);
    data.push_str("</g>");

    let size = format!("{size_px}px");

    svg::svg()
        .style(icon.style.map(|style| style.to_string()))
        .attr("x", icon.x)
        .attr("y", icon.y)
        .attr("width", size.clone())
        .attr("height", size)
        .attr("viewBox", icon.view_box)
        .attr("stroke-linecap", icon.stroke_linecap)
        .attr("stroke-linejoin", icon.stroke_linejoin)
        .attr("stroke-width", icon.stroke_width)
        .attr("stroke", icon.stroke)
        .attr("fill", icon.fill.unwrap_or("currentColor"))
        .attr("role", "graphics-symbol")
        .attr("aria-hidden", aria_hidden.then_some("true"))
        .child(svg::InertElement::new(data))
}
