use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};

use crate::display::domain::display_sink::DisplaySink;
use crate::display::domain::viewport::Viewport;
use crate::shared::frame::Frame;

/// Stands in for a screen: every presented frame is scaled to the surface
/// size and saved as `frame_NNNNNN.png` in the output directory.
pub struct ImageFileSink {
    dir: PathBuf,
    surface: (u32, u32),
    presented: usize,
    fullscreen: bool,
}

impl ImageFileSink {
    pub fn new(dir: &Path, surface: (u32, u32)) -> Self {
        Self {
            dir: dir.to_path_buf(),
            surface,
            presented: 0,
            fullscreen: false,
        }
    }

    pub fn presented(&self) -> usize {
        self.presented
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn next_path(&self) -> PathBuf {
        self.dir.join(format!("frame_{:06}.png", self.presented))
    }
}

impl DisplaySink for ImageFileSink {
    fn surface_size(&self) -> (u32, u32) {
        self.surface
    }

    fn present(
        &mut self,
        frame: &Frame,
        viewport: &Viewport,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if frame.channels() != 3 {
            return Err(format!("cannot save {}-channel frame", frame.channels()).into());
        }
        let visible = frame
            .crop(&viewport.to_rect()?)
            .ok_or("viewport lies outside the frame")?;

        std::fs::create_dir_all(&self.dir)?;

        let mut rgb = visible.data().to_vec();
        for px in rgb.chunks_exact_mut(3) {
            px.swap(0, 2);
        }
        let img = image::RgbImage::from_raw(visible.width(), visible.height(), rgb)
            .ok_or("Failed to create image from frame data")?;

        let (w, h) = self.surface;
        let img = if (w, h) != img.dimensions() && w > 0 && h > 0 {
            imageops::resize(&img, w, h, FilterType::Triangle)
        } else {
            img
        };

        let path = self.next_path();
        img.save(&path)?;
        log::trace!("Presented frame {} to {}", frame.index(), path.display());
        self.presented += 1;
        Ok(())
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        log::info!(
            "Display {} fullscreen",
            if fullscreen { "entering" } else { "leaving" }
        );
        self.fullscreen = fullscreen;
    }
}
