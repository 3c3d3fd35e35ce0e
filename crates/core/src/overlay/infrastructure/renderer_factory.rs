use crate::overlay::domain::overlay_renderer::OverlayRenderer;
use crate::overlay::domain::overlay_style::OverlayStyle;

use super::eye_magnifier::EyeMagnifier;
use super::outline_painter::OutlinePainter;
use super::stylized_mask_painter::StylizedMaskPainter;

/// Builds the renderer with the stages in their required order:
/// magnify, then mask, then outlines.
///
/// Magnification replaces the whole frame, so it must come first; masks are
/// opaque, so outlines go last to stay visible on top of them.
pub fn create_renderer(style: &OverlayStyle) -> OverlayRenderer {
    let renderer = OverlayRenderer::new(vec![
        Box::new(EyeMagnifier::new(style.resample)),
        Box::new(StylizedMaskPainter::new(style.mask_color)),
        Box::new(OutlinePainter::new(style)),
    ]);
    log::info!(
        "Overlay stages {}: {:?} resampling, mask colour {:?}",
        renderer.stage_names().join(" -> "),
        style.resample,
        style.mask_color
    );
    renderer
}
