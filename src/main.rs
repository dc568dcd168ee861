use arcnet::network::{
    parse_network, render_arc_diagram, ArcLayout, MarkStyle, NetworkFormat, Orientation,
    SortOrder,
};
use arcnet::svg::{svg_to_pdf, svg_to_png};
use arcnet::theme::Theme;
use clap::Parser;
use std::path::PathBuf;

/// Lay out a network as an arc diagram and render it to SVG, PNG, PDF or JSON
#[derive(Parser, Debug)]
#[command(name = "arcnet")]
#[command(version)]
#[command(long_about = None)]
struct Args {
    /// Input network file: .json, .yaml or .toml (use "-" for JSON on stdin)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file path (extension determines format: .svg, .png, .pdf or .json)
    #[arg(short, long, value_name = "OUTPUT")]
    output: PathBuf,

    /// Where nodes go: top, bottom, left, right or radial
    #[arg(long, default_value = "bottom", value_parser = parse_orient)]
    orient: Orientation,

    /// Keep source-to-target direction when drawing arcs
    #[arg(short, long)]
    directed: bool,

    /// Node order: none, name, group or degree
    #[arg(short, long, default_value = "none", value_parser = parse_sort)]
    sort: SortOrder,

    /// Built-in theme name or path to a theme file (TOML or YAML)
    #[arg(short, long, value_name = "THEME")]
    theme: Option<String>,

    /// Layout width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Layout height in pixels
    #[arg(long, default_value_t = 400.0)]
    height: f32,

    /// Padding around the layout in pixels
    #[arg(long, default_value_t = 20.0)]
    padding: f32,

    /// Raster scale multiplier for PNG output
    #[arg(long, default_value_t = 1.0)]
    png_scale: f32,
}

fn parse_orient(value: &str) -> Result<Orientation, String> {
    value.parse().map_err(|e: arcnet::LayoutError| e.to_string())
}

fn parse_sort(value: &str) -> Result<SortOrder, String> {
    value.parse().map_err(|e: arcnet::LayoutError| e.to_string())
}

#[cfg(feature = "tracing-json")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    #[cfg(feature = "tracing-json")]
    init_tracing();

    let theme = match args.theme.as_deref() {
        Some(name_or_path) => Theme::load(name_or_path)?,
        None => Theme::default(),
    };

    let (source, format) = if args.input.to_str() == Some("-") {
        let mut buffer = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        (buffer, NetworkFormat::Json)
    } else {
        let source = std::fs::read_to_string(&args.input)
            .map_err(|e| format!("Failed to read input file: {}", e))?;
        let ext = args.input.extension().and_then(|e| e.to_str());
        (source, NetworkFormat::from_extension(ext))
    };

    let network = parse_network(&source, format).map_err(|e| e.to_string())?;
    let mut layout = ArcLayout::new(network);
    layout
        .network_mut()
        .set_size(args.width, args.height)
        .map_err(|e| e.to_string())?;
    layout
        .set_orient(args.orient)
        .set_directed(args.directed)
        .set_sort_order(args.sort)
        .set_style(MarkStyle::from_theme(&theme));
    layout.build();

    let output_ext = args
        .output
        .extension()
        .and_then(|e| e.to_str())
        .ok_or("Output file has no extension")?
        .to_ascii_lowercase();

    match output_ext.as_str() {
        "json" => {
            let json = layout
                .to_json()
                .map_err(|e| format!("Failed to serialize layout: {}", e))?;
            std::fs::write(&args.output, json)
                .map_err(|e| format!("Failed to write JSON: {}", e))?;
            eprintln!("Layout saved to: {}", args.output.display());
        }
        "svg" => {
            let svg = render_arc_diagram(&layout, args.padding);
            std::fs::write(&args.output, svg)
                .map_err(|e| format!("Failed to write SVG: {}", e))?;
            eprintln!("SVG saved to: {}", args.output.display());
        }
        "png" => {
            let svg = render_arc_diagram(&layout, args.padding);
            let png_data = svg_to_png(&svg, args.png_scale)?;
            std::fs::write(&args.output, png_data)
                .map_err(|e| format!("Failed to write PNG: {}", e))?;
            eprintln!("PNG saved to: {}", args.output.display());
        }
        "pdf" => {
            let svg = render_arc_diagram(&layout, args.padding);
            let pdf_data = svg_to_pdf(&svg)?;
            std::fs::write(&args.output, pdf_data)
                .map_err(|e| format!("Failed to write PDF: {}", e))?;
            eprintln!("PDF saved to: {}", args.output.display());
        }
        _ => {
            return Err(format!(
                "Unsupported output format: .{} (use .svg, .png, .pdf or .json)",
                output_ext
            ));
        }
    }

    Ok(())
}
