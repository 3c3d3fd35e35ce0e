pub mod overlay_renderer;
pub mod overlay_stage;
pub mod overlay_style;
