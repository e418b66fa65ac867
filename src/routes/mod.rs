use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::types::app_state::AppState;

mod delete_address_form;
mod get_address_form;
mod get_dashboard_summary;
mod get_location_search_autocomplete;
mod patch_address_form_fields;
mod post_address_form;
mod post_address_form_location;
mod post_address_form_place;
mod post_address_form_submit;
mod post_seller_registration;
#[cfg(test)]
mod test_support;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/address-forms", post(post_address_form::post_address_form))
        .route(
            "/address-forms/:id",
            get(get_address_form::get_address_form)
                .delete(delete_address_form::delete_address_form),
        )
        .route(
            "/address-forms/:id/location",
            post(post_address_form_location::post_address_form_location),
        )
        .route(
            "/address-forms/:id/place",
            post(post_address_form_place::post_address_form_place),
        )
        .route(
            "/address-forms/:id/fields",
            patch(patch_address_form_fields::patch_address_form_fields),
        )
        .route(
            "/address-forms/:id/submit",
            post(post_address_form_submit::post_address_form_submit),
        )
        .route(
            "/location-search-autocomplete",
            get(get_location_search_autocomplete::get_location_search_autocomplete),
        )
        .route(
            "/seller-registrations",
            post(post_seller_registration::post_seller_registration),
        )
        .route(
            "/dashboard/summary",
            get(get_dashboard_summary::get_dashboard_summary),
        )
}
