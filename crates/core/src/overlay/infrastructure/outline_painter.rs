use crate::detection::domain::class_parameters::DetectionClass;
use crate::overlay::domain::overlay_stage::{OverlayError, OverlayScene, OverlayStage};
use crate::overlay::domain::overlay_style::{OverlayStyle, StrokeStyle};
use crate::settings::domain::configuration::Configuration;
use crate::shared::frame::Frame;

use super::drawing::stroke_rect;

/// Draws a border around every box of each enabled class.
///
/// Classes are drawn faces, eyes, mouths, so eye borders sit on top of face
/// borders where they overlap.
pub struct OutlinePainter {
    face: StrokeStyle,
    eye: StrokeStyle,
    mouth: StrokeStyle,
}

impl OutlinePainter {
    pub fn new(style: &OverlayStyle) -> Self {
        Self {
            face: style.face,
            eye: style.eye,
            mouth: style.mouth,
        }
    }

    fn class_style(&self, class: DetectionClass, config: &Configuration) -> Option<StrokeStyle> {
        let (enabled, style) = match class {
            DetectionClass::Face => (config.outline_faces, self.face),
            DetectionClass::Eye => (config.outline_eyes, self.eye),
            DetectionClass::Mouth => (config.outline_mouths, self.mouth),
        };
        enabled.then_some(style)
    }
}

impl Default for OutlinePainter {
    fn default() -> Self {
        Self::new(&OverlayStyle::default())
    }
}

impl OverlayStage for OutlinePainter {
    fn name(&self) -> &'static str {
        "outline"
    }

    fn apply(
        &self,
        frame: &mut Frame,
        scene: &OverlayScene<'_>,
        config: &Configuration,
    ) -> Result<(), OverlayError> {
        for &class in DetectionClass::ALL {
            let Some(style) = self.class_style(class, config) else {
                continue;
            };
            for rect in scene.detections.of_class(class) {
                stroke_rect(frame, rect, style.color, style.thickness);
            }
        }
        Ok(())
    }
}
