use ndarray::{ArrayView3, ArrayViewMut3};

use super::rect::Rect;

/// A captured camera frame: contiguous bytes in row-major order.
///
/// Three-channel frames are BGR, the capture device's native order.
/// Conversion to other layouts happens at I/O boundaries only.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    /// A frame where every pixel has the same channel values.
    pub fn filled(width: u32, height: u32, pixel: &[u8], index: usize) -> Self {
        let data = pixel
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * pixel.len())
            .collect();
        Self::new(data, width, height, pixel.len() as u8, index)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The whole frame as a rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
            .expect("frame dimensions are non-negative")
    }

    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.channels as usize;
        let start = (y as usize * self.width as usize + x as usize) * c;
        &self.data[start..start + c]
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Flips the frame around its vertical axis, in place.
    pub fn mirror_horizontal(&mut self) {
        let c = self.channels as usize;
        let w = self.width as usize;
        if w * c == 0 {
            return;
        }
        for row in self.data.chunks_exact_mut(w * c) {
            for col in 0..w / 2 {
                let (left, right) = row.split_at_mut((w - 1 - col) * c);
                left[col * c..col * c + c].swap_with_slice(&mut right[..c]);
            }
        }
    }

    /// Copies the pixels under `region` (clipped to the frame) into a new,
    /// tightly packed frame. Returns `None` if nothing of `region` is visible.
    pub fn crop(&self, region: &Rect) -> Option<Frame> {
        let visible = region.intersection(&self.bounds())?;
        let c = self.channels as usize;
        let fw = self.width as usize;
        let (rx, ry) = (visible.x() as usize, visible.y() as usize);
        let (rw, rh) = (visible.width() as usize, visible.height() as usize);

        let mut data = Vec::with_capacity(rw * rh * c);
        for row in ry..ry + rh {
            let start = (row * fw + rx) * c;
            data.extend_from_slice(&self.data[start..start + rw * c]);
        }
        Some(Frame::new(
            data,
            rw as u32,
            rh as u32,
            self.channels,
            self.index,
        ))
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
