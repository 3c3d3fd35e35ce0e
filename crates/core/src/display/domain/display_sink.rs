use crate::shared::frame::Frame;

use super::viewport::Viewport;

/// Where finished frames are shown.
pub trait DisplaySink: Send {
    /// Drawable surface size in pixels, `(width, height)`.
    fn surface_size(&self) -> (u32, u32);

    /// Shows the `viewport` part of `frame`, scaled to the surface.
    fn present(
        &mut self,
        frame: &Frame,
        viewport: &Viewport,
    ) -> Result<(), Box<dyn std::error::Error>>;

    fn set_fullscreen(&mut self, _fullscreen: bool) {}
}
