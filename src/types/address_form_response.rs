use serde::{Deserialize, Serialize};

use crate::services::address_forms::address_form::AddressFormSnapshot;

#[derive(Serialize, Deserialize)]
pub struct AddressFormResponse {
    pub data: AddressFormSnapshot,
}
