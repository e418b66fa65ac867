pub mod address_resolver;
pub mod geocoding_service;
