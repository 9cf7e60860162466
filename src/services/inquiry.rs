use crate::domain::inquiry::{Inquiry, NewInquiry};
use crate::repository::{InquiryReader, InquiryWriter, PropertyReader};
use crate::services::{ServiceError, ServiceResult};

/// Persists a contact inquiry for a listing.
///
/// The referenced listing must be visible (active); otherwise the whole
/// operation fails with `NotFound` and nothing is written. Field-level
/// validation happens in the form layer before this is called.
pub fn create_inquiry<R>(repo: &R, new_inquiry: NewInquiry) -> ServiceResult<Inquiry>
where
    R: PropertyReader + InquiryWriter + ?Sized,
{
    repo.get_property_by_id(new_inquiry.property_id)?
        .ok_or(ServiceError::NotFound)?;

    repo.create_inquiry(&new_inquiry).map_err(ServiceError::from)
}

/// Lists the inquiries submitted for a visible listing, oldest first.
pub fn list_property_inquiries<R>(repo: &R, property_id: i32) -> ServiceResult<Vec<Inquiry>>
where
    R: PropertyReader + InquiryReader + ?Sized,
{
    repo.get_property_by_id(property_id)?
        .ok_or(ServiceError::NotFound)?;

    repo.list_inquiries(property_id).map_err(ServiceError::from)
}
