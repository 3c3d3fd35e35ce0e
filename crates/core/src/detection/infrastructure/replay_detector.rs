use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::detection::domain::class_parameters::{ClassParameters, DetectionClass};
use crate::detection::domain::detection_set::DetectionSet;
use crate::detection::domain::object_detector::ObjectDetector;
use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("failed to read detections from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid detection recording {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Replays detector output recorded as JSON.
///
/// The recording is an array of [`DetectionSet`]s, one per frame. Frame `i`
/// receives entry `i % len`, so a short recording can drive an endless
/// capture. An empty recording reports nothing for every frame.
pub struct ReplayDetector {
    recording: Vec<DetectionSet>,
}

impl ReplayDetector {
    pub fn new(recording: Vec<DetectionSet>) -> Self {
        Self { recording }
    }

    pub fn from_file(path: &Path) -> Result<Self, ReplayError> {
        let json = fs::read_to_string(path).map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let recording: Vec<DetectionSet> =
            serde_json::from_str(&json).map_err(|source| ReplayError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!(
            "Loaded {} recorded detection sets from {}",
            recording.len(),
            path.display()
        );
        Ok(Self::new(recording))
    }

    pub fn len(&self) -> usize {
        self.recording.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recording.is_empty()
    }
}

impl ObjectDetector for ReplayDetector {
    fn detect(
        &mut self,
        frame: &Frame,
        class: DetectionClass,
        _params: &ClassParameters,
    ) -> Result<Vec<Rect>, Box<dyn std::error::Error>> {
        if self.recording.is_empty() {
            return Ok(Vec::new());
        }
        let entry = &self.recording[frame.index() % self.recording.len()];
        Ok(entry.of_class(class).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(x, y, w, h).unwrap()
    }

    fn frame(index: usize) -> Frame {
        Frame::filled(4, 4, &[0, 0, 0], index)
    }

    fn recording() -> Vec<DetectionSet> {
        vec![
            DetectionSet::new(vec![rect(0, 0, 10, 10)], vec![], vec![]),
            DetectionSet::new(vec![], vec![rect(1, 1, 2, 2)], vec![rect(3, 3, 1, 1)]),
        ]
    }

    #[test]
    fn test_replays_entry_for_frame_index() {
        let mut det = ReplayDetector::new(recording());
        let params = ClassParameters::new(0.1);
        assert_eq!(
            det.detect(&frame(0), DetectionClass::Face, &params).unwrap(),
            vec![rect(0, 0, 10, 10)]
        );
        assert_eq!(
            det.detect(&frame(1), DetectionClass::Eye, &params).unwrap(),
            vec![rect(1, 1, 2, 2)]
        );
    }

    #[test]
    fn test_wraps_around_recording() {
        let mut det = ReplayDetector::new(recording());
        let params = ClassParameters::new(0.2);
        assert_eq!(
            det.detect(&frame(3), DetectionClass::Mouth, &params).unwrap(),
            vec![rect(3, 3, 1, 1)]
        );
    }

    #[test]
    fn test_empty_recording_reports_nothing() {
        let mut det = ReplayDetector::new(Vec::new());
        assert!(det.is_empty());
        let result = det
            .detect(&frame(7), DetectionClass::Face, &ClassParameters::new(0.1))
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("detections.json");
        fs::write(&path, serde_json::to_string(&recording()).unwrap()).unwrap();
        let det = ReplayDetector::from_file(&path).unwrap();
        assert_eq!(det.len(), 2);
    }

    #[test]
    fn test_from_file_rejects_negative_extent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"[{"faces": [{"x": 0, "y": 0, "width": -5, "height": 10}]}]"#,
        )
        .unwrap();
        let err = ReplayDetector::from_file(&path).err().unwrap();
        assert!(matches!(err, ReplayError::Parse { .. }));
    }

    #[test]
    fn test_from_missing_file() {
        let err = ReplayDetector::from_file(Path::new("/nonexistent/detections.json"))
            .err()
            .unwrap();
        assert!(matches!(err, ReplayError::Read { .. }));
    }
}
