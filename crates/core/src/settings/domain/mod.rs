pub mod configuration;
pub mod toggle_event;
