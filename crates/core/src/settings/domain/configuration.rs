use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detection::domain::class_parameters::{DetectionClass, DetectionTuning};
use crate::shared::constants::DEFAULT_TICK_INTERVAL_MS;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
    #[error("{class} minimum size fraction must be in (0.0, 1.0], got {value}")]
    MinSizeFraction { class: DetectionClass, value: f32 },
    #[error("{class} scale factor must be greater than 1.0, got {value}")]
    ScaleFactor { class: DetectionClass, value: f64 },
}

/// Independently switchable behaviours of the overlay pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    OutlineFaces,
    OutlineEyes,
    OutlineMouths,
    MagnifyPrimaryEye,
    StylizedMask,
    FreezeDisplay,
    Fullscreen,
    MirrorInput,
    DetectMouths,
}

/// Everything a tick needs to know about user preferences.
///
/// `Copy` on purpose: the frame loop takes one snapshot at tick start and
/// every stage reads that copy, never the live store.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub outline_faces: bool,
    pub outline_eyes: bool,
    pub outline_mouths: bool,
    pub magnify_primary_eye: bool,
    pub draw_stylized_mask: bool,
    pub freeze_display: bool,
    pub fullscreen: bool,
    pub mirror_input: bool,
    pub detect_mouths: bool,
    pub tick_interval_ms: u64,
    pub detection: DetectionTuning,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            outline_faces: true,
            outline_eyes: true,
            outline_mouths: false,
            magnify_primary_eye: true,
            draw_stylized_mask: false,
            freeze_display: false,
            fullscreen: true,
            mirror_input: true,
            detect_mouths: true,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            detection: DetectionTuning::default(),
        }
    }
}

impl Configuration {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::OutlineFaces => self.outline_faces,
            Flag::OutlineEyes => self.outline_eyes,
            Flag::OutlineMouths => self.outline_mouths,
            Flag::MagnifyPrimaryEye => self.magnify_primary_eye,
            Flag::StylizedMask => self.draw_stylized_mask,
            Flag::FreezeDisplay => self.freeze_display,
            Flag::Fullscreen => self.fullscreen,
            Flag::MirrorInput => self.mirror_input,
            Flag::DetectMouths => self.detect_mouths,
        }
    }

    pub(crate) fn set_flag(&mut self, flag: Flag, value: bool) {
        let slot = match flag {
            Flag::OutlineFaces => &mut self.outline_faces,
            Flag::OutlineEyes => &mut self.outline_eyes,
            Flag::OutlineMouths => &mut self.outline_mouths,
            Flag::MagnifyPrimaryEye => &mut self.magnify_primary_eye,
            Flag::StylizedMask => &mut self.draw_stylized_mask,
            Flag::FreezeDisplay => &mut self.freeze_display,
            Flag::Fullscreen => &mut self.fullscreen,
            Flag::MirrorInput => &mut self.mirror_input,
            Flag::DetectMouths => &mut self.detect_mouths,
        };
        *slot = value;
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigurationError::ZeroTickInterval);
        }
        for &class in DetectionClass::ALL {
            let params = self.detection.for_class(class);
            if !(params.min_size_fraction > 0.0 && params.min_size_fraction <= 1.0) {
                return Err(ConfigurationError::MinSizeFraction {
                    class,
                    value: params.min_size_fraction,
                });
            }
            if params.scale_factor <= 1.0 {
                return Err(ConfigurationError::ScaleFactor {
                    class,
                    value: params.scale_factor,
                });
            }
        }
        Ok(())
    }
}
