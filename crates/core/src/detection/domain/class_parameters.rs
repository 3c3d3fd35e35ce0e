use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    DEFAULT_MIN_NEIGHBORS, DEFAULT_SCALE_FACTOR, EYE_MIN_SIZE_FRACTION, FACE_MIN_SIZE_FRACTION,
    MOUTH_MIN_SIZE_FRACTION,
};

/// Anatomical class a detector is asked to find.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionClass {
    Face,
    Eye,
    Mouth,
}

impl DetectionClass {
    pub const ALL: &[DetectionClass] = &[
        DetectionClass::Face,
        DetectionClass::Eye,
        DetectionClass::Mouth,
    ];
}

impl std::fmt::Display for DetectionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectionClass::Face => write!(f, "face"),
            DetectionClass::Eye => write!(f, "eye"),
            DetectionClass::Mouth => write!(f, "mouth"),
        }
    }
}

/// Detector tuning knobs for one class. The pipeline forwards these
/// untouched; only the detector interprets them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassParameters {
    /// Smallest accepted box side, as a fraction of frame height.
    pub min_size_fraction: f32,
    pub scale_factor: f64,
    pub min_neighbors: u32,
}

impl ClassParameters {
    pub fn new(min_size_fraction: f32) -> Self {
        Self {
            min_size_fraction,
            scale_factor: DEFAULT_SCALE_FACTOR,
            min_neighbors: DEFAULT_MIN_NEIGHBORS,
        }
    }

    /// Minimum box side in pixels for a frame of the given height.
    pub fn min_size_px(&self, frame_height: u32) -> u32 {
        (frame_height as f32 * self.min_size_fraction).round() as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionTuning {
    pub face: ClassParameters,
    pub eye: ClassParameters,
    pub mouth: ClassParameters,
}

impl DetectionTuning {
    pub fn for_class(&self, class: DetectionClass) -> &ClassParameters {
        match class {
            DetectionClass::Face => &self.face,
            DetectionClass::Eye => &self.eye,
            DetectionClass::Mouth => &self.mouth,
        }
    }
}

impl Default for DetectionTuning {
    fn default() -> Self {
        Self {
            face: ClassParameters::new(FACE_MIN_SIZE_FRACTION),
            eye: ClassParameters::new(EYE_MIN_SIZE_FRACTION),
            mouth: ClassParameters::new(MOUTH_MIN_SIZE_FRACTION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::face(DetectionClass::Face, 48)]
    #[case::eye(DetectionClass::Eye, 24)]
    #[case::mouth(DetectionClass::Mouth, 96)]
    fn test_min_size_for_480_rows(#[case] class: DetectionClass, #[case] expected: u32) {
        let tuning = DetectionTuning::default();
        assert_eq!(tuning.for_class(class).min_size_px(480), expected);
    }

    #[test]
    fn test_min_size_rounds() {
        // 0.05 * 250 = 12.5 -> 13
        assert_eq!(ClassParameters::new(0.05).min_size_px(250), 13);
    }

    #[test]
    fn test_default_thresholds() {
        let tuning = DetectionTuning::default();
        for class in DetectionClass::ALL {
            let p = tuning.for_class(*class);
            assert_relative_eq!(p.scale_factor, 1.1);
            assert_eq!(p.min_neighbors, 2);
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: DetectionTuning = serde_json::from_str(
            r#"{"eye": {"min_size_fraction": 0.08, "scale_factor": 1.2, "min_neighbors": 4}}"#,
        )
        .unwrap();
        assert_relative_eq!(tuning.eye.min_size_fraction, 0.08);
        assert_eq!(tuning.eye.min_neighbors, 4);
        assert_eq!(tuning.face, DetectionTuning::default().face);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DetectionClass::Mouth.to_string(), "mouth");
    }
}
