//! Request/response shapes exchanged with API callers.

pub mod property;
