// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the annotation window. It owns the image texture
//! and forwards canvas clicks and key presses to the shared click
//! collector, closing the window when the user is done.

use crate::display::SharedCollector;
use crate::io::media::LoadedImage;
use crate::models::session::CanvasEvent;
use crate::ui::{canvas, toolbar};

/// Keys that end the session.
const CLOSE_KEYS: [egui::Key; 2] = [egui::Key::Escape, egui::Key::Q];

/// Annotation window state.
pub struct AnnotatorApp {
    /// Click state shared with the caller
    collector: SharedCollector,

    /// Loaded image texture for display
    image_texture: egui::TextureHandle,

    /// Image dimensions (width, height)
    image_size: (u32, u32),

    /// File name shown in the toolbar
    image_name: String,
}

impl AnnotatorApp {
    /// Create the window state, uploading the image as a texture.
    pub fn new(
        ctx: &egui::Context,
        image_name: String,
        image: LoadedImage,
        collector: SharedCollector,
    ) -> Self {
        let size = [image.width as usize, image.height as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
        let image_texture =
            ctx.load_texture("loaded_image", color_image, egui::TextureOptions::LINEAR);

        Self {
            collector,
            image_texture,
            image_size: (image.width, image.height),
            image_name,
        }
    }

    /// Feed one event to the collector.
    fn dispatch(&self, event: &CanvasEvent) {
        self.collector.borrow_mut().handle(event);
    }
}

impl eframe::App for AnnotatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, &self.image_name))
            .inner;

        // Key presses reach the collector too, though only clicks change it
        let keys: Vec<egui::Key> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => Some(*key),
                    _ => None,
                })
                .collect()
        });

        let mut close = toolbar_action == toolbar::ToolbarAction::Finish;
        for key in keys {
            self.dispatch(&CanvasEvent::Key(key.name().to_string()));
            close |= CLOSE_KEYS.contains(&key);
        }

        let canvas_output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let collector = self.collector.borrow();
                canvas::show(
                    ui,
                    &self.image_texture,
                    self.image_size,
                    collector.rectangles(),
                    collector.pending(),
                )
            })
            .inner;

        for event in &canvas_output.events {
            self.dispatch(event);
        }

        if ctx
            .pointer_hover_pos()
            .is_some_and(|pos| canvas_output.image_rect.contains(pos))
        {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }

        if close {
            log::info!("Closing annotation window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
