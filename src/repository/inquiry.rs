use diesel::prelude::*;

use crate::domain::inquiry::{Inquiry, NewInquiry};
use crate::repository::{DieselRepository, InquiryReader, InquiryWriter, errors::RepositoryResult};
use crate::schema::inquiries;

impl InquiryReader for DieselRepository {
    fn list_inquiries(&self, property_id: i32) -> RepositoryResult<Vec<Inquiry>> {
        use crate::models::inquiry::Inquiry as DbInquiry;

        let mut conn = self.conn()?;
        let items = inquiries::table
            .filter(inquiries::property_id.eq(property_id))
            .order(inquiries::created_at.asc())
            .then_order_by(inquiries::id.asc())
            .load::<DbInquiry>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Inquiry>>();

        Ok(items)
    }
}

impl InquiryWriter for DieselRepository {
    fn create_inquiry(&self, new_inquiry: &NewInquiry) -> RepositoryResult<Inquiry> {
        use crate::models::inquiry::{Inquiry as DbInquiry, NewInquiry as DbNewInquiry};

        let mut conn = self.conn()?;
        let insertable: DbNewInquiry = new_inquiry.into();
        let created = diesel::insert_into(inquiries::table)
            .values(&insertable)
            .get_result::<DbInquiry>(&mut conn)?;

        Ok(created.into())
    }
}
