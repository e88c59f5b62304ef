// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interactive display sessions.
//!
//! A [`Display`] shows an image and feeds every click and key event into a
//! shared [`ClickCollector`] on the GUI thread. The session ends when the
//! display returns, at which point the completed rectangles are handed
//! back to the caller.

use crate::app::AnnotatorApp;
use crate::io::media::LoadedImage;
use crate::models::{annotation::Rectangle, session::ClickCollector};
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Collector shared between the caller and the display's event handler.
pub type SharedCollector = Rc<RefCell<ClickCollector>>;

/// Something that can show an image and deliver events until closed.
pub trait Display {
    /// Show `image`, feeding events into `collector`. Returns once the
    /// user has dismissed the display.
    fn show(self, image: LoadedImage, collector: SharedCollector) -> Result<()>;
}

/// Run one annotation session and return the completed rectangles.
pub fn annotate<D: Display>(display: D, image: LoadedImage) -> Result<Vec<Rectangle>> {
    let collector: SharedCollector = Rc::new(RefCell::new(ClickCollector::new()));
    display.show(image, Rc::clone(&collector))?;

    let rectangles = collector.borrow_mut().finish();
    log::info!("Session ended with {} rectangles", rectangles.len());
    Ok(rectangles)
}

/// Native window backed by eframe.
pub struct WindowDisplay {
    title: String,
    image_name: String,
    inner_size: [f32; 2],
}

impl WindowDisplay {
    pub fn new(title: String, image_name: String, inner_size: [f32; 2]) -> Self {
        Self {
            title,
            image_name,
            inner_size,
        }
    }
}

impl Display for WindowDisplay {
    fn show(self, image: LoadedImage, collector: SharedCollector) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.inner_size)
                .with_min_inner_size([400.0, 300.0])
                .with_title(self.title),
            ..Default::default()
        };

        let image_name = self.image_name;
        eframe::run_native(
            "annotation_helper",
            options,
            Box::new(move |cc| {
                Ok(Box::new(AnnotatorApp::new(
                    &cc.egui_ctx,
                    image_name,
                    image,
                    collector,
                )))
            }),
        )
        .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{annotation::Point, session::CanvasEvent};

    /// Replays a fixed list of events, then closes.
    struct ScriptedDisplay(Vec<CanvasEvent>);

    impl Display for ScriptedDisplay {
        fn show(self, image: LoadedImage, collector: SharedCollector) -> Result<()> {
            assert_eq!((image.width, image.height), (50, 50));
            for event in &self.0 {
                collector.borrow_mut().handle(event);
            }
            Ok(())
        }
    }

    struct FailingDisplay;

    impl Display for FailingDisplay {
        fn show(self, _image: LoadedImage, _collector: SharedCollector) -> Result<()> {
            anyhow::bail!("no window available")
        }
    }

    fn test_image() -> LoadedImage {
        LoadedImage {
            width: 50,
            height: 50,
            pixels: vec![0; 50 * 50 * 4],
        }
    }

    fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Rectangle {
        Rectangle::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_single_rectangle_from_two_left_clicks() {
        let display = ScriptedDisplay(vec![
            CanvasEvent::click(10.0, 20.0, 1),
            CanvasEvent::click(30.0, 40.0, 1),
        ]);

        let rects = annotate(display, test_image()).unwrap();
        assert_eq!(rects, vec![rect(10.0, 20.0, 30.0, 40.0)]);
    }

    #[test]
    fn test_right_click_is_ignored() {
        let display = ScriptedDisplay(vec![
            CanvasEvent::click(5.0, 5.0, 3),
            CanvasEvent::click(1.0, 1.0, 1),
            CanvasEvent::click(2.0, 2.0, 1),
        ]);

        let rects = annotate(display, test_image()).unwrap();
        assert_eq!(rects, vec![rect(1.0, 1.0, 2.0, 2.0)]);
    }

    #[test]
    fn test_multiple_rectangles() {
        let display = ScriptedDisplay(vec![
            CanvasEvent::click(0.0, 0.0, 1),
            CanvasEvent::click(10.0, 10.0, 1),
            CanvasEvent::Key("Q".to_string()),
            CanvasEvent::click(20.0, 5.0, 1),
            CanvasEvent::click(25.0, 15.0, 1),
            CanvasEvent::click(40.0, 40.0, 1),
        ]);

        let rects = annotate(display, test_image()).unwrap();
        assert_eq!(
            rects,
            vec![rect(0.0, 0.0, 10.0, 10.0), rect(20.0, 5.0, 25.0, 15.0)]
        );
    }

    #[test]
    fn test_display_error_is_propagated() {
        let err = annotate(FailingDisplay, test_image()).unwrap_err();
        assert_eq!(err.to_string(), "no window available");
    }
}
