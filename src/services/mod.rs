//! Request orchestration: thin functions generic over the repository traits.

pub mod errors;
pub mod inquiry;
pub mod property;

pub use errors::{ServiceError, ServiceResult};
