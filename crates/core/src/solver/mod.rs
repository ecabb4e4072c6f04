//! Numeric building blocks
//!
//! Generic multivariate polynomial evaluation over fixed coefficient tables.
//! The UTCI coefficients themselves live in [`crate::utci::coefficients`].

pub mod polynomial;

pub use polynomial::{Polynomial, Term};
