use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::capture::domain::frame_source::FrameSource;
use crate::shared::constants::IMAGE_EXTENSIONS;
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("failed to list frames in {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no image files found in {0}")]
    NoFrames(PathBuf),
}

/// Plays a directory of still images as a camera stream.
///
/// Files are read in name order and decoded with the `image` crate, one per
/// poll, and converted to BGR. The first decoded frame fixes the session's
/// dimensions; later images of a different size are skipped. Unreadable
/// files are logged and yield no frame for that tick.
///
/// A frame's index is its file's position in the played sequence (counting
/// wraps when looping), so skipped files still use up their index.
pub struct ImageSequenceSource {
    paths: Vec<PathBuf>,
    cursor: usize,
    looping: bool,
    position: usize,
    dimensions: Option<(u32, u32)>,
}

impl ImageSequenceSource {
    pub fn open(dir: &Path, looping: bool) -> Result<Self, CaptureError> {
        let entries = fs::read_dir(dir).map_err(|source| CaptureError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_image(path))
            .collect();
        paths.sort();

        if paths.is_empty() {
            return Err(CaptureError::NoFrames(dir.to_path_buf()));
        }
        log::info!("Capturing {} frames from {}", paths.len(), dir.display());

        Ok(Self {
            paths,
            cursor: 0,
            looping,
            position: 0,
            dimensions: None,
        })
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn next_path(&mut self) -> Option<(usize, PathBuf)> {
        if self.cursor >= self.paths.len() {
            if !self.looping {
                return None;
            }
            self.cursor = 0;
        }
        let entry = (self.position, self.paths[self.cursor].clone());
        self.cursor += 1;
        self.position += 1;
        Some(entry)
    }

    fn decode(&mut self, index: usize, path: &Path) -> Option<Frame> {
        let img = match image::open(path) {
            Ok(img) => img.to_rgb8(),
            Err(e) => {
                log::warn!("Skipping unreadable frame {}: {e}", path.display());
                return None;
            }
        };
        let (width, height) = img.dimensions();
        match self.dimensions {
            Some(expected) if expected != (width, height) => {
                log::warn!(
                    "Skipping {}: {width}x{height} does not match session size {}x{}",
                    path.display(),
                    expected.0,
                    expected.1
                );
                return None;
            }
            Some(_) => {}
            None => self.dimensions = Some((width, height)),
        }

        let mut data = img.into_raw();
        for px in data.chunks_exact_mut(3) {
            px.swap(0, 2);
        }
        Some(Frame::new(data, width, height, 3, index))
    }
}

impl FrameSource for ImageSequenceSource {
    fn try_read_frame(&mut self) -> Option<Frame> {
        let (index, path) = self.next_path()?;
        self.decode(index, &path)
    }
}

fn is_image(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
}
