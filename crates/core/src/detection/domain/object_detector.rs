use super::class_parameters::{ClassParameters, DetectionClass};
use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

/// Domain interface for the external object detector.
///
/// Called once per class per tick. Implementations may keep state between
/// calls (model handles, replay cursors), hence `&mut self`.
pub trait ObjectDetector: Send {
    fn detect(
        &mut self,
        frame: &Frame,
        class: DetectionClass,
        params: &ClassParameters,
    ) -> Result<Vec<Rect>, Box<dyn std::error::Error>>;
}
