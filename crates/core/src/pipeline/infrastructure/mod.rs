pub mod frame_loop_runner;
