pub mod address_forms;
pub mod address_resolution;
pub mod maps_client;
