//! Diesel row and insert models bridging `schema.rs` and the domain types.

pub mod config;
pub mod inquiry;
pub mod property;
