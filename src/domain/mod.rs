//! Plain domain types, free of Diesel and Actix concerns.

pub mod filters;
pub mod inquiry;
pub mod predicate;
pub mod property;
