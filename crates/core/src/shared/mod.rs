pub mod color;
pub mod constants;
pub mod frame;
pub mod rect;
