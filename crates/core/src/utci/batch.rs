//! Input batches: the ordered five-field tuple the evaluator consumes
//!
//! Field order is fixed: `t2` (K), `mrt` (K), `r2` (%), `u10` (m/s),
//! `v10` (m/s). All five must have identical shapes; there is no broadcasting.

use crate::core_types::field::Field;
use crate::core_types::units::{Kelvin, MetersPerSecond, Percent};
use crate::error::UtciError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the five input fields, in batch order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    /// 2 m air temperature (K)
    T2,
    /// Mean radiant temperature (K)
    Mrt,
    /// 2 m relative humidity (%)
    R2,
    /// 10 m eastward wind component (m/s)
    U10,
    /// 10 m northward wind component (m/s)
    V10,
}

impl FieldName {
    /// All fields in batch order
    pub const ALL: [FieldName; 5] = [
        FieldName::T2,
        FieldName::Mrt,
        FieldName::R2,
        FieldName::U10,
        FieldName::V10,
    ];

    /// Short identifier as used by meteorological data sets
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::T2 => "t2",
            FieldName::Mrt => "mrt",
            FieldName::R2 => "r2",
            FieldName::U10 => "u10",
            FieldName::V10 => "v10",
        }
    }

    /// Physical unit of the field
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            FieldName::T2 | FieldName::Mrt => "K",
            FieldName::R2 => "%",
            FieldName::U10 | FieldName::V10 => "m/s",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One typed observation: the five inputs for a single point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeteoSample {
    /// Air temperature
    pub t2: Kelvin,
    /// Mean radiant temperature
    pub mrt: Kelvin,
    /// Relative humidity
    pub r2: Percent,
    /// Eastward wind component
    pub u10: MetersPerSecond,
    /// Northward wind component
    pub v10: MetersPerSecond,
}

impl MeteoSample {
    /// Create a sample
    #[must_use]
    pub fn new(
        t2: Kelvin,
        mrt: Kelvin,
        r2: Percent,
        u10: MetersPerSecond,
        v10: MetersPerSecond,
    ) -> Self {
        Self {
            t2,
            mrt,
            r2,
            u10,
            v10,
        }
    }

    /// Raw values in batch order
    #[must_use]
    pub fn to_array(&self) -> [f64; 5] {
        [*self.t2, *self.mrt, *self.r2, *self.u10, *self.v10]
    }
}

/// Borrowed flat view of the five input fields
///
/// Lengths are checked by [`BatchSlices::validate`]; the element count is the
/// length of `t2`.
#[derive(Debug, Clone, Copy)]
pub struct BatchSlices<'a> {
    /// Air temperature (K)
    pub t2: &'a [f64],
    /// Mean radiant temperature (K)
    pub mrt: &'a [f64],
    /// Relative humidity (%)
    pub r2: &'a [f64],
    /// Eastward wind (m/s)
    pub u10: &'a [f64],
    /// Northward wind (m/s)
    pub v10: &'a [f64],
}

impl<'a> BatchSlices<'a> {
    /// Create a view from slices in batch order
    #[must_use]
    pub fn new(
        t2: &'a [f64],
        mrt: &'a [f64],
        r2: &'a [f64],
        u10: &'a [f64],
        v10: &'a [f64],
    ) -> Self {
        Self {
            t2,
            mrt,
            r2,
            u10,
            v10,
        }
    }

    /// Element count (length of `t2`)
    #[must_use]
    pub fn len(&self) -> usize {
        self.t2.len()
    }

    /// True if the batch has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t2.is_empty()
    }

    /// Slices in batch order
    #[must_use]
    pub fn as_array(&self) -> [&'a [f64]; 5] {
        [self.t2, self.mrt, self.r2, self.u10, self.v10]
    }

    /// Check that every slice has the length of `t2`
    ///
    /// # Errors
    ///
    /// Returns [`UtciError::ShapeMismatch`] naming the first slice whose
    /// length differs.
    pub fn validate(&self) -> Result<(), UtciError> {
        let expected = self.len();
        for (name, slice) in FieldName::ALL.into_iter().zip(self.as_array()).skip(1) {
            if slice.len() != expected {
                return Err(UtciError::ShapeMismatch {
                    field: name,
                    expected: vec![expected],
                    found: vec![slice.len()],
                });
            }
        }
        Ok(())
    }

    /// Raw values of element `i` in batch order
    #[inline]
    pub(crate) fn element(&self, i: usize) -> [f64; 5] {
        [self.t2[i], self.mrt[i], self.r2[i], self.u10[i], self.v10[i]]
    }
}

/// Validated batch of five equal-shape fields
#[derive(Debug, Clone, PartialEq)]
pub struct MeteoBatch {
    t2: Field,
    mrt: Field,
    r2: Field,
    u10: Field,
    v10: Field,
}

impl MeteoBatch {
    /// Assemble a batch, checking that all five shapes equal the shape of `t2`
    ///
    /// # Errors
    ///
    /// Returns [`UtciError::ShapeMismatch`] naming the first field whose shape
    /// differs from `t2`'s.
    pub fn new(t2: Field, mrt: Field, r2: Field, u10: Field, v10: Field) -> Result<Self, UtciError> {
        let batch = Self {
            t2,
            mrt,
            r2,
            u10,
            v10,
        };
        batch.check_shapes()?;
        Ok(batch)
    }

    /// Assemble a batch from fields in `[t2, mrt, r2, u10, v10]` order
    ///
    /// # Errors
    ///
    /// See [`MeteoBatch::new`].
    pub fn from_fields(fields: [Field; 5]) -> Result<Self, UtciError> {
        let [t2, mrt, r2, u10, v10] = fields;
        Self::new(t2, mrt, r2, u10, v10)
    }

    /// A zero-dimensional batch holding one sample
    #[must_use]
    pub fn from_sample(sample: &MeteoSample) -> Self {
        let [t2, mrt, r2, u10, v10] = sample.to_array().map(Field::scalar);
        Self {
            t2,
            mrt,
            r2,
            u10,
            v10,
        }
    }

    fn check_shapes(&self) -> Result<(), UtciError> {
        let expected = self.t2.shape();
        for (name, field) in FieldName::ALL.into_iter().zip(self.fields()).skip(1) {
            if field.shape() != expected {
                return Err(UtciError::ShapeMismatch {
                    field: name,
                    expected: expected.to_vec(),
                    found: field.shape().to_vec(),
                });
            }
        }
        Ok(())
    }

    /// Shared shape of the five fields
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.t2.shape()
    }

    /// Element count
    #[must_use]
    pub fn len(&self) -> usize {
        self.t2.len()
    }

    /// True if the batch has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t2.is_empty()
    }

    /// Fields in batch order
    #[must_use]
    pub fn fields(&self) -> [&Field; 5] {
        [&self.t2, &self.mrt, &self.r2, &self.u10, &self.v10]
    }

    /// Field by name
    #[must_use]
    pub fn field(&self, name: FieldName) -> &Field {
        match name {
            FieldName::T2 => &self.t2,
            FieldName::Mrt => &self.mrt,
            FieldName::R2 => &self.r2,
            FieldName::U10 => &self.u10,
            FieldName::V10 => &self.v10,
        }
    }

    /// Flat borrowed view of the batch
    #[must_use]
    pub fn as_slices(&self) -> BatchSlices<'_> {
        BatchSlices::new(
            self.t2.as_slice(),
            self.mrt.as_slice(),
            self.r2.as_slice(),
            self.u10.as_slice(),
            self.v10.as_slice(),
        )
    }

    /// Split the batch back into its fields
    #[must_use]
    pub fn into_fields(self) -> [Field; 5] {
        [self.t2, self.mrt, self.r2, self.u10, self.v10]
    }
}
