use serde::{Deserialize, Serialize};

use super::class_parameters::DetectionClass;
use crate::shared::rect::Rect;

/// One tick's detector output: three unlinked box lists in detector order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionSet {
    pub faces: Vec<Rect>,
    pub eyes: Vec<Rect>,
    pub mouths: Vec<Rect>,
}

impl DetectionSet {
    pub fn new(faces: Vec<Rect>, eyes: Vec<Rect>, mouths: Vec<Rect>) -> Self {
        Self {
            faces,
            eyes,
            mouths,
        }
    }

    pub fn of_class(&self, class: DetectionClass) -> &[Rect] {
        match class {
            DetectionClass::Face => &self.faces,
            DetectionClass::Eye => &self.eyes,
            DetectionClass::Mouth => &self.mouths,
        }
    }

    pub fn set_class(&mut self, class: DetectionClass, rects: Vec<Rect>) {
        match class {
            DetectionClass::Face => self.faces = rects,
            DetectionClass::Eye => self.eyes = rects,
            DetectionClass::Mouth => self.mouths = rects,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty() && self.eyes.is_empty() && self.mouths.is_empty()
    }

    pub fn total(&self) -> usize {
        self.faces.len() + self.eyes.len() + self.mouths.len()
    }
}
