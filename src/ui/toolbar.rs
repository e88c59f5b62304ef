// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with usage hints and the finish button.

/// Action requested from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    Finish,
}

/// Display the toolbar.
pub fn show(ui: &mut egui::Ui, image_name: &str) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("✔ Done").clicked() {
            action = ToolbarAction::Finish;
        }

        ui.separator();
        ui.label(image_name);
        ui.separator();

        ui.label(
            egui::RichText::new(
                "Left-click two corners to add a rectangle, press Q or Escape to finish",
            )
            .italics()
            .weak(),
        );
    });

    action
}
