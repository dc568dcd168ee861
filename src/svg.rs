use std::path::Path;

use resvg::usvg;
use tiny_skia::{Pixmap, Transform};

use crate::network::{Interpolate, Node};

/// XML 1.0 valid char ranges:
/// - 0x09, 0x0A, 0x0D
/// - 0x20..=0xD7FF
/// - 0xE000..=0xFFFD
/// - 0x10000..=0x10FFFF
fn is_valid_xml_char(c: char) -> bool {
    matches!(
        c as u32,
        0x09 | 0x0A | 0x0D | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF
    )
}

/// Escape text and attribute values, dropping chars XML cannot carry.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars().filter(|&c| is_valid_xml_char(c)) {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Path data for a link drawn from `from` to `to`.
///
/// Polar links are half-ellipses with a clockwise sweep, so swapping the
/// endpoints moves the arc to the other side of the axis.
pub fn arc_path(from: &Node, to: &Node, interpolate: Interpolate) -> String {
    match interpolate {
        Interpolate::Linear => format!("M{:.2},{:.2}L{:.2},{:.2}", from.x, from.y, to.x, to.y),
        Interpolate::Polar => {
            let radius = (to.x - from.x).hypot(to.y - from.y) / 2.0;
            format!(
                "M{:.2},{:.2}A{:.2},{:.2} 0 0,1 {:.2},{:.2}",
                from.x, from.y, radius, radius, to.x, to.y
            )
        }
    }
}

/// Load system fonts plus any under `./fonts`, and point the generic
/// sans-serif family at a face that exists. A macro because resvg and
/// svg2pdf may pull in different `fontdb` versions.
macro_rules! configure_fonts {
    ($fontdb:expr) => {{
        let fontdb = $fontdb;
        fontdb.load_system_fonts();

        let local_fonts = Path::new("fonts");
        if local_fonts.is_dir() {
            fontdb.load_fonts_dir(local_fonts);
        }

        let families = fontdb
            .faces()
            .flat_map(|face| face.families.iter().map(|(family, _)| family.clone()));
        if let Some(family) = pick_sans_family(families) {
            fontdb.set_sans_serif_family(family);
        }
    }};
}

pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>, String> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(format!("Invalid --png-scale value: {}", scale));
    }

    // Configure font options
    let mut opts = usvg::Options::default();
    configure_fonts!(opts.fontdb_mut());

    // Parse the SVG
    let tree =
        usvg::Tree::from_str(svg, &opts).map_err(|e| format!("Failed to parse SVG: {}", e))?;

    let svg_width = (tree.size().width() * scale).ceil() as u32;
    let svg_height = (tree.size().height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(svg_width, svg_height).ok_or("Failed to create pixmap")?;
    let transform = Transform::from_scale(scale, scale);

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| format!("Failed to encode PNG: {}", e))
}

pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, String> {
    use svg2pdf::usvg::fontdb;

    // Configure font options
    let mut fontdb = fontdb::Database::new();
    configure_fonts!(&mut fontdb);

    let mut opts = svg2pdf::usvg::Options::default();
    opts.fontdb = std::sync::Arc::new(fontdb);

    // Parse the SVG
    let tree = svg2pdf::usvg::Tree::from_str(svg, &opts)
        .map_err(|e| format!("Failed to parse SVG: {}", e))?;

    // Convert to PDF, labels as paths so viewers without the font still show them
    let mut options = svg2pdf::ConversionOptions::default();
    options.embed_text = false;
    let page_options = svg2pdf::PageOptions::default();

    svg2pdf::to_pdf(&tree, options, page_options)
        .map_err(|e| format!("Failed to convert SVG to PDF: {}", e))
}

/// First family that looks like a sans face, else the first family seen.
fn pick_sans_family(families: impl Iterator<Item = String>) -> Option<String> {
    let mut first = None;
    for family in families {
        if family.to_ascii_lowercase().contains("sans") {
            return Some(family);
        }
        first.get_or_insert(family);
    }
    first
}
