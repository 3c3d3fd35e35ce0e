use image::imageops::{self, FilterType};

use crate::overlay::domain::overlay_stage::{OverlayError, OverlayScene, OverlayStage};
use crate::overlay::domain::overlay_style::ResampleFilter;
use crate::settings::domain::configuration::Configuration;
use crate::shared::frame::Frame;

/// Blows the primary eye up to fill the whole frame.
///
/// Everything outside the eye box is discarded. Stages that run afterwards
/// still draw in original frame coordinates.
pub struct EyeMagnifier {
    filter: FilterType,
}

impl EyeMagnifier {
    pub fn new(filter: ResampleFilter) -> Self {
        Self {
            filter: filter.into(),
        }
    }
}

impl Default for EyeMagnifier {
    fn default() -> Self {
        Self::new(ResampleFilter::default())
    }
}

impl OverlayStage for EyeMagnifier {
    fn name(&self) -> &'static str {
        "magnify"
    }

    fn apply(
        &self,
        frame: &mut Frame,
        scene: &OverlayScene<'_>,
        config: &Configuration,
    ) -> Result<(), OverlayError> {
        if !config.magnify_primary_eye {
            return Ok(());
        }
        let Some(eye) = scene.primary_eye else {
            return Ok(());
        };
        let Some(crop) = frame.crop(&eye) else {
            log::debug!("Primary eye {eye:?} lies outside the frame, not magnifying");
            return Ok(());
        };

        let scaled = resample(&crop, frame.width(), frame.height(), self.filter)?;
        frame.data_mut().copy_from_slice(&scaled);
        Ok(())
    }
}

fn resample(
    src: &Frame,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Vec<u8>, OverlayError> {
    let resample_error = || OverlayError::Resample {
        width: src.width(),
        height: src.height(),
    };
    // The image crate treats channels positionally, so BGR data resizes the
    // same way as RGB.
    match src.channels() {
        3 => {
            let img = image::RgbImage::from_raw(src.width(), src.height(), src.data().to_vec())
                .ok_or_else(resample_error)?;
            Ok(imageops::resize(&img, width, height, filter).into_raw())
        }
        4 => {
            let img = image::RgbaImage::from_raw(src.width(), src.height(), src.data().to_vec())
                .ok_or_else(resample_error)?;
            Ok(imageops::resize(&img, width, height, filter).into_raw())
        }
        other => Err(OverlayError::UnsupportedChannels(other)),
    }
}
