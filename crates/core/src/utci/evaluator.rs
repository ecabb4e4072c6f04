//! UTCI evaluation
//!
//! Pipeline per element:
//! 1. wind speed from `(u10, v10)`
//! 2. saturation vapour pressure from `t2`
//! 3. conversion to `Ta` (°C), `D_Tmrt` (°C), `Pa` (kPa)
//! 4. clipping into the regression's validity ranges
//! 5. `UTCI = Ta + P(Ta, va, D_Tmrt, Pa)`, converted back to Kelvin
//!
//! Elements are independent, so batches are mapped element-wise either on
//! one thread or with Rayon, with identical results.

use super::batch::{BatchSlices, MeteoBatch, MeteoSample};
use super::coefficients::UTCI_POLYNOMIAL;
use super::config::EvaluatorConfig;
use super::regression::RegressionInputs;
use crate::core_types::field::Field;
use crate::core_types::units::{Celsius, Kelvin, CELSIUS_KELVIN_OFFSET};
use crate::error::UtciError;
use rayon::prelude::*;
use tracing::debug;

/// UTCI (°C) for regression inputs that are already clipped
#[inline]
#[must_use]
pub fn utci_celsius_from_inputs(inputs: &RegressionInputs) -> f64 {
    UTCI_POLYNOMIAL.evaluate_from(inputs.ta, inputs.as_array())
}

/// UTCI (K) from raw meteorological values
///
/// # Arguments
/// * `t2` - Air temperature (K)
/// * `mrt` - Mean radiant temperature (K)
/// * `r2` - Relative humidity (%)
/// * `u10` - Eastward wind (m/s)
/// * `v10` - Northward wind (m/s)
///
/// NaN in any input yields NaN.
#[inline]
#[must_use]
pub fn utci_kelvin(t2: f64, mrt: f64, r2: f64, u10: f64, v10: f64) -> f64 {
    let inputs = RegressionInputs::from_raw(t2, mrt, r2, u10, v10).clipped();
    utci_celsius_from_inputs(&inputs) + CELSIUS_KELVIN_OFFSET
}

#[inline]
fn evaluate_element([t2, mrt, r2, u10, v10]: [f64; 5]) -> f64 {
    utci_kelvin(t2, mrt, r2, u10, v10)
}

/// Stateless UTCI evaluator
///
/// Holds only scheduling settings; every call is a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UtciEvaluator {
    config: EvaluatorConfig,
}

impl UtciEvaluator {
    /// Create an evaluator with the given settings
    #[must_use]
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Scheduling settings
    #[must_use]
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// UTCI (K) for one set of raw values; see [`utci_kelvin`]
    #[must_use]
    pub fn evaluate(&self, t2: f64, mrt: f64, r2: f64, u10: f64, v10: f64) -> f64 {
        utci_kelvin(t2, mrt, r2, u10, v10)
    }

    /// UTCI for one typed sample
    #[must_use]
    pub fn evaluate_sample(&self, sample: &MeteoSample) -> Kelvin {
        Kelvin::new(evaluate_element(sample.to_array()))
    }

    /// UTCI for one typed sample, in °C
    #[must_use]
    pub fn evaluate_sample_celsius(&self, sample: &MeteoSample) -> Celsius {
        self.evaluate_sample(sample).to_celsius()
    }

    /// Clipped regression variables the polynomial sees for `sample`
    #[must_use]
    pub fn regression_inputs(&self, sample: &MeteoSample) -> RegressionInputs {
        let [t2, mrt, r2, u10, v10] = sample.to_array();
        RegressionInputs::from_raw(t2, mrt, r2, u10, v10).clipped()
    }

    /// Evaluate flat input slices into `out`
    ///
    /// # Errors
    ///
    /// Returns [`UtciError::ShapeMismatch`] if the input lengths differ and
    /// [`UtciError::OutputLength`] if `out` is not as long as the inputs.
    /// `out` is untouched on error.
    pub fn evaluate_slices(&self, inputs: BatchSlices<'_>, out: &mut [f64]) -> Result<(), UtciError> {
        inputs.validate()?;
        if out.len() != inputs.len() {
            return Err(UtciError::OutputLength {
                expected: inputs.len(),
                found: out.len(),
            });
        }
        self.fill(inputs, out);
        Ok(())
    }

    /// Evaluate a validated batch; the result has the batch's shape
    #[must_use]
    pub fn evaluate_batch(&self, batch: &MeteoBatch) -> Field {
        let mut out = Field::filled(batch.shape(), 0.0);
        self.fill(batch.as_slices(), out.as_mut_slice());
        out
    }

    /// Validate five fields in `[t2, mrt, r2, u10, v10]` order and evaluate them
    ///
    /// # Errors
    ///
    /// Returns [`UtciError::ShapeMismatch`] if any shape differs from `t2`'s.
    pub fn evaluate_fields(&self, fields: [Field; 5]) -> Result<Field, UtciError> {
        let batch = MeteoBatch::from_fields(fields)?;
        Ok(self.evaluate_batch(&batch))
    }

    fn fill(&self, inputs: BatchSlices<'_>, out: &mut [f64]) {
        let len = out.len();
        let parallel = self.config.runs_parallel(len);
        debug!(
            "Evaluating UTCI batch: {} elements, parallel={}, chunk_size={}",
            len, parallel, self.config.chunk_size
        );

        if parallel {
            let chunk_size = self.config.chunk_size.max(1);
            out.par_chunks_mut(chunk_size)
                .enumerate()
                .for_each(|(chunk_index, chunk)| {
                    let start = chunk_index * chunk_size;
                    for (offset, value) in chunk.iter_mut().enumerate() {
                        *value = evaluate_element(inputs.element(start + offset));
                    }
                });
        } else {
            for (i, value) in out.iter_mut().enumerate() {
                *value = evaluate_element(inputs.element(i));
            }
        }
    }
}
