pub mod display_sink;
pub mod viewport;
