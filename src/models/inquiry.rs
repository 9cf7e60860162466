use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::inquiry::{Inquiry as DomainInquiry, NewInquiry as DomainNewInquiry};
use crate::models::property::Property;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(table_name = crate::schema::inquiries)]
#[diesel(belongs_to(Property, foreign_key = property_id))]
/// Diesel model for [`crate::domain::inquiry::Inquiry`].
pub struct Inquiry {
    pub id: i32,
    pub property_id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::inquiries)]
/// Insertable form of [`Inquiry`].
pub struct NewInquiry<'a> {
    pub property_id: i32,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub message: &'a str,
}

impl From<Inquiry> for DomainInquiry {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.id,
            property_id: inquiry.property_id,
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            message: inquiry.message,
            created_at: inquiry.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewInquiry> for NewInquiry<'a> {
    fn from(inquiry: &'a DomainNewInquiry) -> Self {
        Self {
            property_id: inquiry.property_id,
            name: inquiry.name.as_str(),
            email: inquiry.email.as_str(),
            phone: inquiry.phone.as_deref(),
            message: inquiry.message.as_str(),
        }
    }
}
