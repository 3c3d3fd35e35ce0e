use serde::{Deserialize, Serialize};

/// An opaque colour in frame channel order (blue, green, red).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const BLACK: Color = Color::bgr(0, 0, 0);
    pub const GREEN: Color = Color::bgr(0, 255, 0);
    pub const CYAN: Color = Color::bgr(255, 255, 0);
    pub const RED: Color = Color::bgr(0, 0, 255);

    pub const fn bgr(b: u8, g: u8, r: u8) -> Self {
        Self([b, g, r])
    }

    pub fn channels(&self) -> &[u8; 3] {
        &self.0
    }
}
