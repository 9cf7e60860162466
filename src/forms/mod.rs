//! Hand-written request validation, kept independent of the persistence
//! layer's schema representation.

pub mod inquiry;
pub mod property;
pub mod search;
