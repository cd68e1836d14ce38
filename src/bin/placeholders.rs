// Dev tool: render labelled placeholder cover images for listings without photos
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Background colors, cycled by image index.
const PALETTE: &[&str] = &[
    "#8e6c8a", "#4f6d7a", "#c0a36e", "#6b8f71", "#a4513e", "#3f4e6b", "#7d7461",
];

#[derive(Error, Debug)]
enum PlaceholderError {
    #[error("Failed to parse SVG: {0}")]
    Svg(#[from] usvg::Error),

    #[error("Cannot allocate a {0}x{1} pixmap")]
    Pixmap(u32, u32),

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to create output directory: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Size {
    width: u32,
    height: u32,
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .ok()
                .filter(|n| (1..=4096).contains(n))
                .ok_or_else(|| format!("'{v}' is not a size between 1 and 4096"))
        };
        Ok(Size {
            width: parse(w)?,
            height: parse(h)?,
        })
    }
}

#[derive(Parser, Debug)]
#[command(name = "placeholders", about = "Generate placeholder cover images")]
struct Args {
    /// Directory the images are written to
    out_dir: PathBuf,

    /// Number of images
    #[arg(short, long, default_value_t = 8)]
    count: usize,

    /// Image size as WIDTHxHEIGHT
    #[arg(short, long, default_value = "300x450")]
    size: Size,

    /// File extension, decides the image format (png, jpg, webp, ...)
    #[arg(short, long, default_value = "png")]
    format: String,
}

fn placeholder_svg(size: Size, index: usize) -> String {
    let Size { width, height } = size;
    let background = PALETTE[index % PALETTE.len()];
    let font_size = (width.min(height) / 8).max(8);
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
  <rect width="100%" height="100%" fill="{background}"/>
  <rect x="6%" y="6%" width="88%" height="88%" fill="none" stroke="#ffffff" stroke-opacity="0.4" stroke-width="2"/>
  <text x="50%" y="46%" font-family="sans-serif" font-size="{font_size}" fill="#ffffff" text-anchor="middle">{width}×{height}</text>
  <text x="50%" y="60%" font-family="sans-serif" font-size="{small}" fill="#ffffff" fill-opacity="0.8" text-anchor="middle">#{number}</text>
</svg>"##,
        small = (font_size * 2 / 3).max(6),
        number = index + 1,
    )
}

/// JPEG and friends reject RGBA buffers.
fn has_alpha_channel(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    !matches!(ext.as_str(), "jpg" | "jpeg" | "bmp" | "pnm" | "ppm")
}

fn render(svg: &str, options: &usvg::Options, path: &Path) -> Result<(), PlaceholderError> {
    let tree = usvg::Tree::from_str(svg, options)?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or(PlaceholderError::Pixmap(size.width(), size.height()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // Backgrounds are opaque, so premultiplied and straight alpha agree
    let buffer = image::RgbaImage::from_raw(size.width(), size.height(), pixmap.take())
        .ok_or(PlaceholderError::Pixmap(size.width(), size.height()))?;
    if has_alpha_channel(path) {
        buffer.save(path)?;
    } else {
        image::DynamicImage::ImageRgba8(buffer).to_rgb8().save(path)?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<Vec<PathBuf>, PlaceholderError> {
    fs::create_dir_all(&args.out_dir)?;

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let mut written = Vec::with_capacity(args.count);
    for index in 0..args.count {
        let path = args
            .out_dir
            .join(format!("placeholder-{}.{}", index + 1, args.format));
        render(&placeholder_svg(args.size, index), &options, &path)?;
        tracing::debug!(path = %path.display(), "wrote placeholder");
        written.push(path);
    }
    Ok(written)
}

fn main() {
    let args = Args::parse();
    bookstall::logging::init(1);

    match run(&args) {
        Ok(written) => println!(
            "Generated {} placeholder(s) in {}",
            written.len(),
            args.out_dir.display()
        ),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
