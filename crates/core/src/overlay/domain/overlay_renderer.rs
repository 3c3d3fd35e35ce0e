use std::time::{Duration, Instant};

use crate::detection::domain::detection_set::DetectionSet;
use crate::settings::domain::configuration::Configuration;
use crate::shared::frame::Frame;

use super::overlay_stage::{OverlayError, OverlayScene, OverlayStage};

/// Applies overlay stages to a frame in a fixed order.
///
/// Stages overwrite each other's pixels, so the order the renderer was built
/// with is part of its behaviour. The first failing stage aborts the render;
/// the frame may then be partially drawn and should not be displayed.
pub struct OverlayRenderer {
    stages: Vec<Box<dyn OverlayStage>>,
}

impl OverlayRenderer {
    pub fn new(stages: Vec<Box<dyn OverlayStage>>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        detections: &DetectionSet,
        config: &Configuration,
    ) -> Result<(), OverlayError> {
        self.render_observed(frame, detections, config, |_, _| {})
    }

    /// Like [`render`](Self::render), reporting each stage's name and
    /// duration after it completes.
    pub fn render_observed(
        &self,
        frame: &mut Frame,
        detections: &DetectionSet,
        config: &Configuration,
        mut observe: impl FnMut(&'static str, Duration),
    ) -> Result<(), OverlayError> {
        let scene = OverlayScene::new(detections);
        for stage in &self.stages {
            let started = Instant::now();
            stage.apply(frame, &scene, config)?;
            observe(stage.name(), started.elapsed());
        }
        Ok(())
    }
}
