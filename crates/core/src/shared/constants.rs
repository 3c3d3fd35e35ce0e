pub const APP_NAME: &str = "Eyeblow";
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Wall-clock spacing between pipeline ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Display surface used when the sink has no window of its own.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 640;
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 480;

/// Minimum box size per class, as a fraction of frame height.
pub const FACE_MIN_SIZE_FRACTION: f32 = 0.10;
pub const EYE_MIN_SIZE_FRACTION: f32 = 0.05;
pub const MOUTH_MIN_SIZE_FRACTION: f32 = 0.20;

/// Multi-scale detector tuning shared by all classes.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.1;
pub const DEFAULT_MIN_NEIGHBORS: u32 = 2;

pub const FACE_STROKE: u32 = 3;
pub const EYE_STROKE: u32 = 2;
pub const MOUTH_STROKE: u32 = 2;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
