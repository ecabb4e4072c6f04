//! Shape validation of UTCI batches
//!
//! A batch whose shapes disagree must be rejected before any element is
//! computed, and the error must name the offending field.

mod common;

use common::uniform_fields;
use utci_core::{BatchSlices, Field, FieldName, MeteoBatch, UtciError, UtciEvaluator};

const VALUES: [f64; 5] = [298.15, 300.0, 50.0, 1.0, 0.5];

#[test]
fn test_mismatch_names_each_field() {
    for (index, name) in FieldName::ALL.into_iter().enumerate().skip(1) {
        let mut fields = uniform_fields(&[4, 5], VALUES);
        fields[index] = Field::filled(&[5, 4], VALUES[index]);

        let err = UtciEvaluator::default().evaluate_fields(fields).unwrap_err();
        assert_eq!(
            err,
            UtciError::ShapeMismatch {
                field: name,
                expected: vec![4, 5],
                found: vec![5, 4],
            }
        );
        assert!(err.to_string().contains(name.as_str()));
    }
}

#[test]
fn test_first_mismatch_is_reported() {
    let mut fields = uniform_fields(&[3], VALUES);
    fields[2] = Field::filled(&[2], 50.0);
    fields[4] = Field::filled(&[7], 0.5);

    let err = MeteoBatch::from_fields(fields).unwrap_err();
    assert!(matches!(
        err,
        UtciError::ShapeMismatch {
            field: FieldName::R2,
            ..
        }
    ));
}

#[test]
fn test_scalar_does_not_broadcast() {
    let mut fields = uniform_fields(&[1], VALUES);
    fields[1] = Field::scalar(300.0);

    let err = MeteoBatch::from_fields(fields).unwrap_err();
    assert_eq!(
        err,
        UtciError::ShapeMismatch {
            field: FieldName::Mrt,
            expected: vec![1],
            found: vec![],
        }
    );
}

#[test]
fn test_same_length_different_shape_rejected() {
    let mut fields = uniform_fields(&[6], VALUES);
    fields[3] = Field::filled(&[2, 3], 1.0);
    assert!(MeteoBatch::from_fields(fields).is_err());
}

#[test]
fn test_rejected_slices_leave_output_untouched() {
    let t2 = [298.15; 4];
    let short = [50.0; 3];
    let mut out = [-1.0; 4];

    let err = UtciEvaluator::default()
        .evaluate_slices(BatchSlices::new(&t2, &t2, &short, &t2, &t2), &mut out)
        .unwrap_err();

    assert_eq!(
        err,
        UtciError::ShapeMismatch {
            field: FieldName::R2,
            expected: vec![4],
            found: vec![3],
        }
    );
    assert_eq!(out, [-1.0; 4]);
}

#[test]
fn test_valid_batch_round_trips_fields() {
    let batch = MeteoBatch::from_fields(uniform_fields(&[2, 2], VALUES)).unwrap();
    assert_eq!(batch.shape(), &[2, 2]);
    assert_eq!(batch.field(FieldName::R2).as_slice(), &[50.0; 4]);

    let [t2, ..] = batch.into_fields();
    assert_eq!(t2.as_slice(), &[298.15; 4]);
}

#[test]
fn test_empty_batch_evaluates_to_empty_field() {
    let out = UtciEvaluator::default()
        .evaluate_fields(uniform_fields(&[0, 3], VALUES))
        .unwrap();
    assert_eq!(out.shape(), &[0, 3]);
    assert!(out.is_empty());
}
