// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! This module defines the points and rectangles produced by clicking on
//! an image. Coordinates are in image data space (source pixels, origin
//! at the top-left corner).

/// A 2D point in image data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle defined by two clicked corners.
///
/// Corners keep the order they were clicked in; no attempt is made to
/// reorder them into top-left/bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub start: Point,
    pub end: Point,
}

impl Rectangle {
    /// Create a rectangle from its first and second clicked corners.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Corners as `[start, end]`.
    pub fn corners(&self) -> [Point; 2] {
        [self.start, self.end]
    }
}
