//! N-dimensional field storage for batch evaluation
//!
//! A `Field` is a flat `Vec<f64>` in row-major order plus its shape. A scalar
//! is a field with an empty shape and one element.

use crate::error::UtciError;
use serde::{Deserialize, Serialize};

/// Field data container
///
/// Stores N-D data as a flat `Vec<f64>` in row-major order (last axis fastest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawField")]
pub struct Field {
    shape: Vec<usize>,
    data: Vec<f64>,
}

/// Unchecked wire form; validated through [`Field::new`] on deserialize
#[derive(Deserialize)]
struct RawField {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl TryFrom<RawField> for Field {
    type Error = UtciError;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        Field::new(raw.shape, raw.data)
    }
}

/// Element count of `shape`, or `None` if it overflows `usize`
fn element_count(shape: &[usize]) -> Option<usize> {
    if shape.contains(&0) {
        return Some(0);
    }
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

impl Field {
    /// Create a field from a shape and row-major data
    ///
    /// # Errors
    ///
    /// Returns [`UtciError::InvalidShape`] if the product of `shape` overflows
    /// or does not equal `data.len()`.
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> Result<Self, UtciError> {
        if element_count(&shape) != Some(data.len()) {
            return Err(UtciError::InvalidShape {
                shape,
                len: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Create a zero-dimensional field holding one value
    #[must_use]
    pub fn scalar(value: f64) -> Self {
        Self {
            shape: Vec::new(),
            data: vec![value],
        }
    }

    /// Create a one-dimensional field from a vector
    #[must_use]
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Create a field of the given shape filled with `value`
    ///
    /// # Panics
    ///
    /// Panics if the element count of `shape` overflows `usize`.
    #[must_use]
    #[track_caller]
    pub fn filled(shape: &[usize], value: f64) -> Self {
        let Some(len) = element_count(shape) else {
            panic!("Field::filled: element count of shape {shape:?} overflows usize");
        };
        Self {
            shape: shape.to_vec(),
            data: vec![value; len],
        }
    }

    /// Shape of the field; empty for a scalar
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total element count
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the field holds no elements (some axis has length zero)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get reference to field data
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable reference to field data
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the field and return its flat data
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// The single value of a zero-dimensional field
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        if self.shape.is_empty() {
            self.data.first().copied()
        } else {
            None
        }
    }

    /// Get value at an N-D index
    ///
    /// Returns `None` if the index rank differs from the field's or any
    /// coordinate is out of bounds.
    #[must_use]
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        self.flat_index(index).map(|i| self.data[i])
    }

    /// Create a field of the same shape by applying `f` to every element
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            shape: self.shape.clone(),
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    fn flat_index(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            flat = flat * dim + i;
        }
        Some(flat)
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::scalar(value)
    }
}

impl From<Vec<f64>> for Field {
    fn from(data: Vec<f64>) -> Self {
        Field::from_vec(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let field = Field::new(vec![2, 3], vec![0.0; 6]).unwrap();
        assert_eq!(field.shape(), &[2, 3]);
        assert_eq!(field.ndim(), 2);
        assert_eq!(field.len(), 6);
        assert!(field.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_invalid_shape_rejected() {
        let err = Field::new(vec![2, 3], vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            UtciError::InvalidShape {
                shape: vec![2, 3],
                len: 5
            }
        );
    }

    #[test]
    fn test_overflowing_shape_rejected() {
        let err = Field::new(vec![usize::MAX, 2], Vec::new()).unwrap_err();
        assert_eq!(
            err,
            UtciError::InvalidShape {
                shape: vec![usize::MAX, 2],
                len: 0
            }
        );
        // A zero axis keeps the count at zero whatever the other axes are
        assert!(Field::new(vec![usize::MAX, 2, 0], Vec::new()).is_ok());
        let json = format!(r#"{{"shape":[{},4],"data":[]}}"#, 1u64 << 63);
        assert!(serde_json::from_str::<Field>(&json).is_err());
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_filled_overflowing_shape_panics() {
        let _ = Field::filled(&[usize::MAX, 2], 0.0);
    }

    #[test]
    fn test_deserialize_validates_shape() {
        let ok: Field = serde_json::from_str(r#"{"shape":[2],"data":[1.0,2.0]}"#).unwrap();
        assert_eq!(ok.shape(), &[2]);
        assert!(serde_json::from_str::<Field>(r#"{"shape":[3],"data":[1.0,2.0]}"#).is_err());
    }

    #[test]
    fn test_scalar_field() {
        let field = Field::scalar(4.5);
        assert!(field.shape().is_empty());
        assert_eq!(field.len(), 1);
        assert_eq!(field.as_scalar(), Some(4.5));
        assert_eq!(field.get(&[]), Some(4.5));
        assert_eq!(Field::from_vec(vec![4.5]).as_scalar(), None);
    }

    #[test]
    fn test_row_major_indexing() {
        let field = Field::new(vec![2, 3, 4], (0..24).map(f64::from).collect()).unwrap();
        assert_eq!(field.get(&[0, 0, 0]), Some(0.0));
        assert_eq!(field.get(&[0, 1, 0]), Some(4.0));
        assert_eq!(field.get(&[1, 0, 0]), Some(12.0));
        assert_eq!(field.get(&[1, 2, 3]), Some(23.0));
        assert_eq!(field.get(&[2, 0, 0]), None);
        assert_eq!(field.get(&[0, 0]), None);
    }

    #[test]
    fn test_empty_axis() {
        let field = Field::new(vec![3, 0], Vec::new()).unwrap();
        assert!(field.is_empty());
        assert_eq!(field.shape(), &[3, 0]);
    }

    #[test]
    fn test_map_preserves_shape() {
        let field = Field::filled(&[2, 2], 1.0).map(|v| v + 1.0);
        assert_eq!(field.shape(), &[2, 2]);
        assert!(field.as_slice().iter().all(|&v| v == 2.0));
    }
}
