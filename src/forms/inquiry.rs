use serde::Deserialize;
use validator::Validate;

use crate::domain::inquiry::NewInquiry;

#[derive(Debug, Deserialize, Validate)]
/// Body of a contact inquiry submission. Absent fields deserialize to empty
/// strings so they fail validation with field-level detail instead of a
/// generic deserialization error.
pub struct CreateInquiryForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    pub phone: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

impl CreateInquiryForm {
    /// Converts the validated form into a [`NewInquiry`] bound to the
    /// listing from the request path.
    #[must_use]
    pub fn into_new_inquiry(self, property_id: i32) -> NewInquiry {
        NewInquiry::new(property_id, self.name, self.email, self.phone, self.message)
    }
}
