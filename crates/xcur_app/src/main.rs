//! Xcur - Xcursor image extractor
//!
//! Picks the cursor image closest to a requested size and writes it out as a
//! JSON pixel report.

mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::{Level, info};

use report::JsonReportSink;
use xcur_core::{ImageSink, ImageSummary};
use xcur_io::CursorFile;

#[derive(Parser, Debug)]
#[command(name = "xcur")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Xcursor file to read
    input: PathBuf,

    /// Desired nominal cursor size in pixels
    #[arg(short, long, default_value_t = 32)]
    size: u32,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the image chunks instead of extracting one
    #[arg(short, long, default_value_t = false)]
    list: bool,

    /// Log selection details to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let cursor = CursorFile::open(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    if args.list {
        let images = xcur_core::list_images(cursor.as_bytes())
            .with_context(|| format!("Failed to read {}", cursor.path().display()))?;
        print_inventory(&images);
        return Ok(());
    }

    let image = xcur_core::decode(cursor.as_bytes(), args.size)
        .with_context(|| format!("Failed to decode {}", cursor.path().display()))?;
    info!(
        width = image.width,
        height = image.height,
        hotspot_x = image.hotspot_x,
        hotspot_y = image.hotspot_y,
        "decoded cursor image"
    );

    let source = cursor.path().display().to_string();
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut sink = JsonReportSink::new(BufWriter::new(file), source);
            sink.emit(&image).context("Failed to write report")?;
            sink.into_inner()
                .into_inner()
                .context("Failed to flush report")?;
            info!(path = %path.display(), "report written");
        }
        None => {
            JsonReportSink::new(io::stdout().lock(), source)
                .emit(&image)
                .context("Failed to write report")?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn print_inventory(images: &[ImageSummary]) {
    println!(
        "{:<6} {:<8} {:>10} {:>10} {:>8} {:>8}",
        "INDEX", "NOMINAL", "SIZE", "HOTSPOT", "DELAY", "OFFSET"
    );
    println!("{}", "-".repeat(55));

    for image in images {
        println!(
            "{:<6} {:<8} {:>10} {:>10} {:>8} {:>8}",
            image.index,
            image.nominal_size,
            format!("{}x{}", image.width, image.height),
            format!("{},{}", image.hotspot_x, image.hotspot_y),
            format!("{}ms", image.delay_ms),
            format!("0x{:x}", image.file_offset),
        );
    }
}
