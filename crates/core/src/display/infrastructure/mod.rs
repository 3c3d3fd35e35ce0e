pub mod image_file_sink;
