use crate::overlay::domain::overlay_stage::{OverlayError, OverlayScene, OverlayStage};
use crate::settings::domain::configuration::Configuration;
use crate::shared::color::Color;
use crate::shared::frame::Frame;
use crate::shared::rect::{bounding_box, Rect};

use super::drawing::fill_rect;

/// Paints an opaque helmet over each face, leaving a slit at the eyes.
///
/// The slit is the bounding box of the eyes grouped with that face. Faces
/// without eyes are left untouched.
pub struct StylizedMaskPainter {
    color: Color,
}

impl StylizedMaskPainter {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for StylizedMaskPainter {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

impl OverlayStage for StylizedMaskPainter {
    fn name(&self) -> &'static str {
        "mask"
    }

    fn apply(
        &self,
        frame: &mut Frame,
        scene: &OverlayScene<'_>,
        config: &Configuration,
    ) -> Result<(), OverlayError> {
        if !config.draw_stylized_mask {
            return Ok(());
        }
        for group in scene.eye_groups.iter().filter(|g| g.has_eyes()) {
            let slit = bounding_box(&group.eyes)?;
            for panel in mask_panels(&group.face, &slit)? {
                fill_rect(frame, &panel, self.color);
            }
        }
        Ok(())
    }
}

/// The four panels covering `face` minus `slit`: full-height columns left
/// and right of the slit, plus the parts above and below it.
fn mask_panels(face: &Rect, slit: &Rect) -> Result<[Rect; 4], OverlayError> {
    Ok([
        Rect::from_corners(face.top_left(), (slit.x(), face.bottom()))?,
        Rect::from_corners((slit.x(), face.y()), (slit.right(), slit.y()))?,
        Rect::from_corners((slit.x(), slit.bottom()), (slit.right(), face.bottom()))?,
        Rect::from_corners((slit.right(), face.y()), face.bottom_right())?,
    ])
}
