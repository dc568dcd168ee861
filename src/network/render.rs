use crate::svg::{arc_path, escape_xml};

use super::arc::ArcLayout;
use super::label::label_placement;

/// Render a built arc layout to a standalone SVG document, `padding`
/// pixels around the layout box.
pub fn render_arc_diagram(layout: &ArcLayout, padding: f32) -> String {
    let style = layout.style();
    let (width, height) = layout.built_size();
    let total_w = width + padding * 2.0;
    let total_h = height + padding * 2.0;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_w:.2}" height="{total_h:.2}"
 viewBox="0 0 {total_w:.2} {total_h:.2}">
<rect width="{total_w:.2}" height="{total_h:.2}" fill="{}"/>
<g transform="translate({padding:.2},{padding:.2})">
"#,
        escape_xml(&style.background),
    );

    // Arcs behind dots
    svg.push_str(&format!(
        r#"<g fill="none" stroke="{}" stroke-opacity="{:.2}">"#,
        escape_xml(&style.link_stroke),
        style.link_opacity
    ));
    for arc in layout.arcs() {
        svg.push_str(&format!(
            r#"<path d="{}" stroke-width="{:.2}"/>"#,
            arc_path(arc.from, arc.to, arc.interpolate),
            style.link_width_for(arc.link.value)
        ));
    }
    svg.push_str("</g>\n");

    svg.push_str(&format!(
        r#"<g stroke="{}" stroke-width="{:.2}">"#,
        escape_xml(&style.node_stroke),
        style.node_stroke_width
    ));
    for node in layout.nodes() {
        svg.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            node.x,
            node.y,
            style.node_radius,
            escape_xml(style.fill_for(node))
        ));
    }
    svg.push_str("</g>\n");

    svg.push_str(&format!(
        r#"<g fill="{}" font-family="{}" font-size="{:.2}" dominant-baseline="middle">"#,
        escape_xml(&style.label_color),
        escape_xml(&style.font_family),
        style.font_size
    ));
    for node in layout.nodes() {
        let label = label_placement(node, style.label_margin);
        svg.push_str(&format!(
            concat!(
                r#"<text x="{x:.2}" y="{y:.2}" text-anchor="{}" "#,
                r#"transform="rotate({:.2} {x:.2} {y:.2})">{}</text>"#,
            ),
            label.anchor.as_svg(),
            label.angle.to_degrees(),
            escape_xml(&node.name),
            x = label.x,
            y = label.y,
        ));
    }
    svg.push_str("</g>\n</g>\n</svg>\n");

    svg
}
