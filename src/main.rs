// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation helper
//!
//! Shows an image, collects rectangles from pairs of left clicks and
//! prints their corner coordinates as `x1, y1, x2, y2.` lines.

mod app;
mod display;
mod io;
mod models;
mod ui;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use display::WindowDisplay;
use std::path::PathBuf;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "annotation_helper",
    version,
    about = "Click two corners per rectangle on an image and print their coordinates"
)]
struct Args {
    /// Image to annotate. A file dialog opens when omitted.
    image: Option<PathBuf>,

    /// Write the rectangles to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 720.0)]
    height: f32,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    run(args)
}

/// Load the image, run the session and emit the formatted rectangles.
fn run(args: Args) -> Result<()> {
    let path = match args.image {
        Some(path) => path,
        None => rfd::FileDialog::new()
            .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "gif", "webp"])
            .pick_file()
            .context("No image selected")?,
    };

    // Fail before opening a window if the image is unusable
    let image = io::media::load_image(&path)?;

    let image_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let window = WindowDisplay::new(
        format!("Annotate - {}", image_name),
        image_name,
        [args.width, args.height],
    );

    let rectangles = display::annotate(window, image)?;

    match args.output {
        Some(output) => {
            io::export::write_text(&rectangles, &output)?;
            log::info!(
                "Wrote {} rectangles to {}",
                rectangles.len(),
                output.display()
            );
        }
        None => print!("{}", io::export::render(&rectangles)),
    }

    Ok(())
}
