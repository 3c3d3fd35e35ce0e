use serde::{Deserialize, Serialize};

use crate::shared::color::Color;
use crate::shared::constants::{EYE_STROKE, FACE_STROKE, MOUTH_STROKE};

/// Border drawn around one detection class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub thickness: u32,
}

/// Resampling used when the primary eye is blown up to full frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    Nearest,
    #[default]
    Bilinear,
}

impl From<ResampleFilter> for image::imageops::FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => image::imageops::FilterType::Nearest,
            ResampleFilter::Bilinear => image::imageops::FilterType::Triangle,
        }
    }
}

/// Visual constants of the overlay: colours, stroke widths, resampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub face: StrokeStyle,
    pub eye: StrokeStyle,
    pub mouth: StrokeStyle,
    pub mask_color: Color,
    pub resample: ResampleFilter,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            face: StrokeStyle {
                color: Color::GREEN,
                thickness: FACE_STROKE,
            },
            eye: StrokeStyle {
                color: Color::CYAN,
                thickness: EYE_STROKE,
            },
            mouth: StrokeStyle {
                color: Color::RED,
                thickness: MOUTH_STROKE,
            },
            mask_color: Color::BLACK,
            resample: ResampleFilter::default(),
        }
    }
}
