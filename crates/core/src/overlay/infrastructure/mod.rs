mod drawing;
pub mod eye_magnifier;
pub mod outline_painter;
pub mod renderer_factory;
pub mod stylized_mask_painter;
