// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Click collection session state.
//!
//! This module turns a stream of canvas events into rectangles. Two
//! primary clicks make one rectangle; everything else is ignored.

use super::annotation::{Point, Rectangle};

/// Mouse button that produced a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
    Other(u8),
}

impl MouseButton {
    /// Map a conventional button code (1 = left, 2 = middle, 3 = right).
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => MouseButton::Primary,
            2 => MouseButton::Middle,
            3 => MouseButton::Secondary,
            other => MouseButton::Other(other),
        }
    }
}

/// Input delivered by a display while the session is live.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// Button press at a position already converted to data space.
    Click { button: MouseButton, position: Point },
    /// Key press, identified by key name.
    Key(String),
}

impl CanvasEvent {
    /// Convenience constructor for a click using a numeric button code.
    #[cfg(test)]
    pub fn click(x: f64, y: f64, button: u8) -> Self {
        CanvasEvent::Click {
            button: MouseButton::from_code(button),
            position: Point::new(x, y),
        }
    }
}

/// Collector state: waiting for a first corner, or holding one.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Pending(Point),
}

/// Accumulates rectangles from primary clicks.
#[derive(Debug, Clone)]
pub struct ClickCollector {
    state: State,
    rectangles: Vec<Rectangle>,
}

impl Default for ClickCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickCollector {
    /// Create an idle collector with no rectangles.
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            rectangles: Vec::new(),
        }
    }

    /// Apply one event. Returns the rectangle this event completed, if any.
    pub fn handle(&mut self, event: &CanvasEvent) -> Option<Rectangle> {
        let position = match event {
            CanvasEvent::Click {
                button: MouseButton::Primary,
                position,
            } => *position,
            CanvasEvent::Click { button, .. } => {
                log::debug!("Ignoring {:?} click", button);
                return None;
            }
            CanvasEvent::Key(_) => return None,
        };

        match self.state {
            State::Idle => {
                self.state = State::Pending(position);
                log::debug!("First corner at ({}, {})", position.x, position.y);
                None
            }
            State::Pending(start) => {
                let rect = Rectangle::new(start, position);
                self.rectangles.push(rect);
                self.state = State::Idle;
                log::info!(
                    "Added rectangle ({}, {}) -> ({}, {}), total: {}",
                    start.x,
                    start.y,
                    position.x,
                    position.y,
                    self.rectangles.len()
                );
                Some(rect)
            }
        }
    }

    /// First corner of the rectangle in progress.
    pub fn pending(&self) -> Option<Point> {
        match self.state {
            State::Idle => None,
            State::Pending(p) => Some(p),
        }
    }

    /// Rectangles completed so far, in completion order.
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// End the session, discarding any unmatched corner.
    ///
    /// Leaves the collector idle and empty.
    pub fn finish(&mut self) -> Vec<Rectangle> {
        if let State::Pending(p) = self.state {
            log::info!("Discarding unmatched corner at ({}, {})", p.x, p.y);
        }
        self.state = State::Idle;
        std::mem::take(&mut self.rectangles)
    }
}
