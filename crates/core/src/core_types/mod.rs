//! Core types and utilities

pub mod field;
pub mod units;

pub use field::Field;
pub use units::*;
