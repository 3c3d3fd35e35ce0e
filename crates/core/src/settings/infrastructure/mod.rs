pub mod configuration_store;
