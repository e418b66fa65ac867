pub mod address_form;
pub mod form_registry;
pub mod place_search_service;
