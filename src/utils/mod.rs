pub mod app_error;
pub mod validated_json;
pub mod validated_query;
