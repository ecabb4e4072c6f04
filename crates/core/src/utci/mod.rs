//! Universal Thermal Climate Index
//!
//! The operational UTCI procedure: a fixed sixth-order regression polynomial
//! over air temperature, wind speed, radiant offset and vapour pressure.

pub mod batch;
pub mod coefficients;
pub mod config;
pub mod evaluator;
pub mod regression;
pub mod stress;

pub use batch::{BatchSlices, FieldName, MeteoBatch, MeteoSample};
pub use coefficients::{utci_polynomial, UTCI_POLYNOMIAL, UTCI_TERMS, UTCI_TERM_COUNT};
pub use config::{EvaluatorConfig, ExecutionMode};
pub use evaluator::{utci_celsius_from_inputs, utci_kelvin, UtciEvaluator};
pub use regression::{clip_ranges, RegressionInputs};
pub use stress::{stress_ranges, ThermalStress};
