use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A contact message a prospective renter submitted about a listing.
///
/// Immutable after creation; owned by the property it references.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i32,
    pub property_id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewInquiry {
    pub property_id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl NewInquiry {
    #[must_use]
    pub fn new(
        property_id: i32,
        name: String,
        email: String,
        phone: Option<String>,
        message: String,
    ) -> Self {
        Self {
            property_id,
            name: name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            message: message.trim().to_string(),
        }
    }
}
