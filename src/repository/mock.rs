//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::inquiry::{Inquiry, NewInquiry};
use crate::domain::property::{NewProperty, Property};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    InquiryReader, InquiryWriter, PropertyReader, PropertySearchQuery, PropertyWriter,
};

mock! {
    pub Repository {}

    impl PropertyReader for Repository {
        fn get_property_by_id(&self, id: i32) -> RepositoryResult<Option<Property>>;
        fn search_properties(
            &self,
            query: PropertySearchQuery,
        ) -> RepositoryResult<(usize, Vec<Property>)>;
        fn list_neighborhoods(&self) -> RepositoryResult<Vec<String>>;
        fn list_boroughs(&self) -> RepositoryResult<Vec<String>>;
    }

    impl PropertyWriter for Repository {
        fn create_property(&self, new_property: &NewProperty) -> RepositoryResult<Property>;
        fn deactivate_property(&self, property_id: i32) -> RepositoryResult<()>;
    }

    impl InquiryReader for Repository {
        fn list_inquiries(&self, property_id: i32) -> RepositoryResult<Vec<Inquiry>>;
    }

    impl InquiryWriter for Repository {
        fn create_inquiry(&self, new_inquiry: &NewInquiry) -> RepositoryResult<Inquiry>;
    }
}
