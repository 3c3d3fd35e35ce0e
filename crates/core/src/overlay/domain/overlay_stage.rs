use thiserror::Error;

use crate::detection::domain::detection_set::DetectionSet;
use crate::detection::domain::region_associator::{EyeGroup, RegionAssociator};
use crate::settings::domain::configuration::Configuration;
use crate::shared::frame::Frame;
use crate::shared::rect::{GeometryError, Rect};

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u8),
    #[error("failed to resample {width}x{height} region")]
    Resample { width: u32, height: u32 },
}

/// Per-tick geometry shared by every overlay stage.
///
/// Derived once from the detector output so stages agree on grouping and on
/// which eye is primary.
#[derive(Debug)]
pub struct OverlayScene<'a> {
    pub detections: &'a DetectionSet,
    pub eye_groups: Vec<EyeGroup>,
    pub primary_eye: Option<Rect>,
}

impl<'a> OverlayScene<'a> {
    pub fn new(detections: &'a DetectionSet) -> Self {
        Self {
            eye_groups: RegionAssociator::associate_eyes_to_faces(
                &detections.faces,
                &detections.eyes,
            ),
            primary_eye: RegionAssociator::select_primary_eye(&detections.faces, &detections.eyes),
            detections,
        }
    }
}

/// One in-place transform of the frame buffer.
///
/// Stages check their own configuration flag and return without touching the
/// frame when disabled.
pub trait OverlayStage: Send {
    fn name(&self) -> &'static str;

    fn apply(
        &self,
        frame: &mut Frame,
        scene: &OverlayScene<'_>,
        config: &Configuration,
    ) -> Result<(), OverlayError>;
}
