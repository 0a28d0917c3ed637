use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::Rgb;
use once_cell::sync::Lazy;
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Sizes written when no `--sizes` are given.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Pixel dimensions of the embedded placeholder.
pub const PLACEHOLDER_SIZE: (u32, u32) = (1, 1);

// Minimal valid PNG holding a single pixel.
const PLACEHOLDER_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

static PLACEHOLDER_PNG: Lazy<Vec<u8>> = Lazy::new(|| {
    STANDARD
        .decode(PLACEHOLDER_PNG_BASE64)
        .expect("embedded placeholder is valid base64")
});

/// What to generate and where.
#[derive(Debug)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

/// Presentation inputs a real icon renderer would use.
///
/// The placeholder emitter accepts these but does not draw them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconStyle {
    pub background: Rgb<u8>,
    pub label: String,
    pub label_color: Rgb<u8>,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: Rgb([10, 14, 39]),
            label: "T".to_string(),
            label_color: Rgb([0, 255, 255]),
        }
    }
}

/// The decoded placeholder PNG, shared by every generated icon.
pub fn placeholder_png() -> &'static [u8] {
    &PLACEHOLDER_PNG
}

/// Pixel dimensions of the placeholder as decoded by the PNG reader.
pub fn placeholder_dimensions() -> Result<(u32, u32)> {
    let img = image::load_from_memory(placeholder_png())
        .context("Failed to decode placeholder PNG")?;
    Ok((img.width(), img.height()))
}

/// Produce the PNG bytes for an icon of the requested size.
///
/// Always returns the placeholder; `width`, `height` and `style` only show up
/// in the progress note.
pub fn create_png(width: u32, height: u32, _style: &IconStyle) -> &'static [u8] {
    println!("Note: Creating placeholder icon {width}x{height}");
    println!("For production-quality icons, use a proper image editor or image library");

    placeholder_png()
}

/// File name for an icon of the given size, e.g. `icon48.png`.
pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

/// Write one placeholder icon per size into `args.output`, creating the
/// directory if needed.
///
/// Stops at the first failed write. Icons written before it are left on disk.
pub fn generate_icons(args: Args) -> Result<()> {
    create_dir_all(&args.output).context("Can't create output directory")?;

    let style = IconStyle::default();
    for &size in &args.sizes {
        let filename = icon_filename(size);
        let data = create_png(size, size, &style);
        write_icon(&args.output.join(&filename), data)?;
        println!("Created {filename}");
    }

    print_guidance();
    Ok(())
}

fn write_icon(path: &Path, data: &[u8]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    out_file
        .write_all(data)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    out_file
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn print_guidance() {
    let (width, height) = PLACEHOLDER_SIZE;

    println!();
    println!("Note: These are placeholder {width}x{height} PNGs.");
    println!("For production, please create proper icons using:");
    println!("- Online tool: https://favicon.io/");
    println!("- Figma/Sketch/Photoshop");
    println!("- Or a real source image with an icon generator");
}
