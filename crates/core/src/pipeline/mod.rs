pub mod frame_loop;
pub mod infrastructure;
pub mod pipeline_logger;
