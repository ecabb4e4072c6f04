//! UTCI Core Library
//!
//! Computes the Universal Thermal Climate Index (UTCI) from five meteorological
//! fields using the operational sixth-order regression polynomial.
//!
//! ## Pipeline
//!
//! - Wind speed from the 10 m wind components
//! - Saturation vapour pressure from thermodynamic constants
//! - Conversion to the regression variables `Ta`, `va`, `D_Tmrt`, `Pa` and
//!   clipping into their validity ranges
//! - Evaluation of the 210-term polynomial, result in Kelvin
//!
//! The computation is pure and element-wise. Batches of any shape are mapped
//! element by element, in parallel with Rayon when they are large enough.
//!
//! ```
//! use utci_core::utci_kelvin;
//!
//! // t2, mrt (K), r2 (%), u10, v10 (m/s)
//! let utci = utci_kelvin(298.15, 298.15, 50.0, 0.5, 0.0);
//! assert!((utci - 297.9957).abs() < 0.01);
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Physical sub-computations
pub mod physics;

// Numeric building blocks
pub mod solver;

// The index itself
pub mod utci;

// Re-export core types
pub use core_types::{
    Celsius, CelsiusDelta, Field, Kelvin, Kilopascals, MetersPerSecond, Pascals, Percent,
};
pub use error::{ConfigError, UtciError};

// Re-export the evaluation API
pub use utci::{
    utci_kelvin, BatchSlices, EvaluatorConfig, ExecutionMode, FieldName, MeteoBatch, MeteoSample,
    RegressionInputs, ThermalStress, UtciEvaluator,
};
