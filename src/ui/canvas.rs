// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for image display and rectangle annotation.
//!
//! This module draws the image scaled to fit the available space, draws
//! completed rectangles and the pending corner on top, and reports button
//! presses in image data coordinates.

use crate::models::{
    annotation::{Point, Rectangle},
    session::{CanvasEvent, MouseButton},
};
use crate::util::geometry;

/// What the canvas produced this frame.
pub struct CanvasOutput {
    /// Button presses on the image, in data coordinates
    pub events: Vec<CanvasEvent>,
    /// Screen rectangle the image was drawn into
    pub image_rect: egui::Rect,
}

/// Conventional button code for an egui pointer button.
fn button_code(button: egui::PointerButton) -> u8 {
    match button {
        egui::PointerButton::Primary => 1,
        egui::PointerButton::Middle => 2,
        egui::PointerButton::Secondary => 3,
        egui::PointerButton::Extra1 => 8,
        egui::PointerButton::Extra2 => 9,
    }
}

/// Convert a screen position to data coordinates, or `None` outside the image.
pub fn screen_to_data(
    pos: egui::Pos2,
    image_rect: egui::Rect,
    image_size: (u32, u32),
) -> Option<Point> {
    if !image_rect.contains(pos) {
        return None;
    }

    let rel_x = (pos.x - image_rect.min.x) / image_rect.width();
    let rel_y = (pos.y - image_rect.min.y) / image_rect.height();
    Some(geometry::relative_to_data(
        rel_x as f64,
        rel_y as f64,
        image_size.0,
        image_size.1,
    ))
}

/// Display the image with annotations and return the presses made on it.
pub fn show(
    ui: &mut egui::Ui,
    texture: &egui::TextureHandle,
    image_size: (u32, u32),
    rectangles: &[Rectangle],
    pending: Option<Point>,
) -> CanvasOutput {
    let mut events = Vec::new();
    let (img_width, img_height) = image_size;

    // Set background color
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    let image_rect = egui::Frame::canvas(ui.style())
        .show(ui, |ui| {
            ui.set_min_size(available_size);

            let available = ui.available_size();
            let (display_width, display_height) =
                geometry::fit_size(img_width, img_height, (available.x, available.y));

            // Center the image
            let x_offset = (available.x - display_width) / 2.0;
            let y_offset = (available.y - display_height) / 2.0;

            let image_rect = egui::Rect::from_min_size(
                ui.min_rect().min + egui::vec2(x_offset, y_offset),
                egui::vec2(display_width, display_height),
            );

            ui.painter().image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            let response = ui.allocate_rect(image_rect, egui::Sense::hover());

            // Presses count on their own, however long the button is held
            let presses: Vec<(egui::Pos2, egui::PointerButton)> = ui.input(|i| {
                i.events
                    .iter()
                    .filter_map(|event| match event {
                        egui::Event::PointerButton {
                            pos,
                            button,
                            pressed: true,
                            ..
                        } => Some((*pos, *button)),
                        _ => None,
                    })
                    .collect()
            });

            for (pos, pointer) in presses {
                if let Some(position) = screen_to_data(pos, image_rect, image_size) {
                    let button = MouseButton::from_code(button_code(pointer));
                    events.push(CanvasEvent::Click { button, position });
                }
            }

            let painter = ui.painter();
            let to_screen = |p: &Point| {
                let (rel_x, rel_y) = geometry::data_to_relative(p, img_width, img_height);
                egui::pos2(
                    image_rect.min.x + rel_x as f32 * image_rect.width(),
                    image_rect.min.y + rel_y as f32 * image_rect.height(),
                )
            };

            for rect in rectangles {
                let [start, end] = rect.corners();
                let screen = egui::Rect::from_two_pos(to_screen(&start), to_screen(&end));
                painter.rect_stroke(screen, 0.0, egui::Stroke::new(2.0, egui::Color32::YELLOW));
            }

            if let Some(corner) = pending {
                let pos = to_screen(&corner);
                painter.circle_filled(pos, 4.0, egui::Color32::LIGHT_BLUE);
                painter.circle_stroke(pos, 4.0, egui::Stroke::new(1.0, egui::Color32::BLACK));

                // Preview the rectangle under the pointer
                if let Some(hover) = response.hover_pos() {
                    painter.rect_stroke(
                        egui::Rect::from_two_pos(pos, hover),
                        0.0,
                        egui::Stroke::new(1.0, egui::Color32::LIGHT_BLUE),
                    );
                }
            }

            image_rect
        })
        .inner;

    // Status line
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(format!("Rectangles: {}", rectangles.len()));
        ui.separator();
        match pending {
            Some(p) => ui.label(format!("First corner at ({:.1}, {:.1})", p.x, p.y)),
            None => ui.label("Ready"),
        };
    });

    CanvasOutput { events, image_rect }
}
