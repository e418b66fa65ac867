use serde::{Deserialize, Serialize};

/// Form-facing decomposition of a geocoded result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredAddress {
    pub formatted_address: String,
    pub building: String,
    pub landmark: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// Manual edits typed into the form, one optional value per field.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StructuredAddressEdits {
    pub formatted_address: Option<String>,
    pub building: Option<String>,
    pub landmark: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
}

impl StructuredAddress {
    pub fn apply_edits(&mut self, edits: StructuredAddressEdits) {
        let StructuredAddressEdits {
            formatted_address,
            building,
            landmark,
            city,
            state,
            pincode,
        } = edits;

        for (field, value) in [
            (&mut self.formatted_address, formatted_address),
            (&mut self.building, building),
            (&mut self.landmark, landmark),
            (&mut self.city, city),
            (&mut self.state, state),
            (&mut self.pincode, pincode),
        ] {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}
