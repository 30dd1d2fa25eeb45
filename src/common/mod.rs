//! Common types and utilities shared across the crate.

pub mod id;
pub mod unit;
pub mod xml;

pub use id::IdCounter;
