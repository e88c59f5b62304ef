// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for coordinate transformations between
//! positions relative to the displayed image (0.0 to 1.0) and image data
//! coordinates (source pixels).

use crate::models::annotation::Point;

/// Convert a position relative to the displayed image into data coordinates.
pub fn relative_to_data(rel_x: f64, rel_y: f64, width: u32, height: u32) -> Point {
    Point {
        x: rel_x * width as f64,
        y: rel_y * height as f64,
    }
}

/// Convert data coordinates into a position relative to the displayed image.
pub fn data_to_relative(point: &Point, width: u32, height: u32) -> (f64, f64) {
    (point.x / width as f64, point.y / height as f64)
}

/// Largest size with the image's aspect ratio that fits in `available`.
pub fn fit_size(width: u32, height: u32, available: (f32, f32)) -> (f32, f32) {
    let img_aspect = width as f32 / height as f32;
    let available_aspect = available.0 / available.1;

    if img_aspect > available_aspect {
        // Wider than the space: fit to width
        (available.0, available.0 / img_aspect)
    } else {
        (available.1 * img_aspect, available.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_data_roundtrip() {
        let width = 1920;
        let height = 1080;
        let point = Point::new(960.0, 540.0);

        let (rel_x, rel_y) = data_to_relative(&point, width, height);
        let back = relative_to_data(rel_x, rel_y, width, height);

        assert!((back.x - point.x).abs() < 0.0001);
        assert!((back.y - point.y).abs() < 0.0001);
    }

    #[test]
    fn test_relative_corners() {
        let width = 50;
        let height = 40;

        // Top-left corner
        let tl = relative_to_data(0.0, 0.0, width, height);
        assert_eq!(tl, Point::new(0.0, 0.0));

        // Bottom-right corner
        let br = relative_to_data(1.0, 1.0, width, height);
        assert_eq!(br, Point::new(50.0, 40.0));
    }

    #[test]
    fn test_fit_size() {
        // Wide image in a square: width-limited
        assert_eq!(fit_size(200, 100, (400.0, 400.0)), (400.0, 200.0));
        // Tall image in a square: height-limited
        assert_eq!(fit_size(100, 200, (400.0, 400.0)), (200.0, 400.0));
    }
}
