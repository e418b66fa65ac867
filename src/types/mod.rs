pub mod address_form_response;
pub mod app_state;
pub mod coordinate;
pub mod dashboard_summary;
pub mod map_view;
pub mod structured_address;
