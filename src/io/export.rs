// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Plain text export of rectangles.
//!
//! Each rectangle becomes one `x1, y1, x2, y2.` line, wrapped between a
//! leading and a trailing line break.

use crate::models::annotation::Rectangle;
use anyhow::{Context, Result};
use std::path::Path;

/// Line break placed before and after the rectangle block.
pub const LINE_BREAK: &str = "\n";

/// Format a single rectangle as `x1, y1, x2, y2.`.
pub fn format_rectangle(rect: &Rectangle) -> String {
    format!(
        "{}, {}, {}, {}.",
        rect.start.x, rect.start.y, rect.end.x, rect.end.y
    )
}

/// Format rectangles as `[leading break, lines, trailing break]`.
pub fn format_rectangles(rectangles: &[Rectangle]) -> [String; 3] {
    let body = rectangles
        .iter()
        .map(format_rectangle)
        .collect::<Vec<_>>()
        .join(LINE_BREAK);

    [LINE_BREAK.to_string(), body, LINE_BREAK.to_string()]
}

/// Format rectangles as one text block.
pub fn render(rectangles: &[Rectangle]) -> String {
    format_rectangles(rectangles).concat()
}

/// Write the rendered text block to a file.
pub fn write_text(rectangles: &[Rectangle], path: &Path) -> Result<()> {
    std::fs::write(path, render(rectangles))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
