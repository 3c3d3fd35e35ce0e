use crate::shared::rect::{GeometryError, Rect};

/// The part of a frame shown on the display surface, in frame coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Fits the frame's width to the display width and centre-crops the
    /// height to the display's aspect ratio.
    ///
    /// When the display is relatively taller than the frame, the crop would
    /// exceed the frame; it is clamped to the full frame height instead.
    pub fn fit_width(
        frame_width: u32,
        frame_height: u32,
        display_width: u32,
        display_height: u32,
    ) -> Self {
        let (fw, fh) = (frame_width as f64, frame_height as f64);
        if frame_width == 0 || display_width == 0 {
            return Self::full(fw, fh);
        }
        let ratio = display_width as f64 / fw;
        let height = (display_height as f64 / ratio).min(fh);
        Self {
            x: 0.0,
            y: ((fh - height) / 2.0).max(0.0),
            width: fw,
            height,
        }
    }

    fn full(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Pixel-aligned rectangle covering the viewport.
    pub fn to_rect(&self) -> Result<Rect, GeometryError> {
        let x = self.x.round() as i32;
        let y = self.y.round() as i32;
        let right = (self.x + self.width).round() as i32;
        let bottom = (self.y + self.height).round() as i32;
        Rect::from_corners((x, y), (right.max(x), bottom.max(y)))
    }
}
