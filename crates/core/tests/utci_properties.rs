//! Behavioural properties of the UTCI evaluator
//!
//! Covers the reference scenario, clipping, wind invariance, the zero radiant
//! offset case, shape preservation, determinism and a monotonicity smoke test.

mod common;

use approx::assert_relative_eq;
use common::{k, uniform_fields, varied_fields};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use utci_core::utci::coefficients::UTCI_POLYNOMIAL;
use utci_core::{
    utci_kelvin, EvaluatorConfig, Field, MeteoBatch, RegressionInputs, ThermalStress,
    UtciEvaluator,
};

/// Published acceptance tolerance for reimplementations (K)
const REFERENCE_TOLERANCE: f64 = 0.01;

#[test]
fn test_reference_scenario() {
    // Ta = 25°C, Tmrt = 25°C, RH = 50 %, va = 0.5 m/s
    let utci = utci_kelvin(298.15, 298.15, 50.0, 0.5, 0.0);
    assert!(
        (utci - 297.9957).abs() < REFERENCE_TOLERANCE,
        "reference UTCI was {utci} K"
    );
    assert_eq!(
        ThermalStress::from_celsius(utci - 273.15),
        Some(ThermalStress::NoStress)
    );
}

#[test]
fn test_calm_wind_uses_clip_floor() {
    // va = 0 is clipped to 0.5 m/s, the reference scenario's wind speed
    assert_eq!(
        utci_kelvin(298.15, 298.15, 50.0, 0.0, 0.0),
        utci_kelvin(298.15, 298.15, 50.0, 0.5, 0.0)
    );
}

#[test]
fn test_cold_clip_boundary() {
    // Dry air keeps Pa at 0 for both, and mrt = t2 keeps D_Tmrt at 0, so only
    // Ta differs before clipping.
    let below = utci_kelvin(193.15, 193.15, 0.0, 2.0, 0.0);
    let at_bound = utci_kelvin(223.15, 223.15, 0.0, 2.0, 0.0);
    assert_eq!(below, at_bound);
}

#[test]
fn test_hot_clip_boundary() {
    let above = utci_kelvin(353.15, 353.15, 0.0, 2.0, 0.0);
    let at_bound = utci_kelvin(323.15, 323.15, 0.0, 2.0, 0.0);
    assert_eq!(above, at_bound);
}

#[test]
fn test_humid_cold_air_still_differs_through_vapor_pressure() {
    // Saturation pressure uses the raw t2, so with humidity present the two
    // temperatures give different Pa even though Ta clips to the same value.
    let below = utci_kelvin(193.15, 193.15, 50.0, 2.0, 0.0);
    let at_bound = utci_kelvin(223.15, 223.15, 50.0, 2.0, 0.0);
    assert_ne!(below, at_bound);
    assert!((below - at_bound).abs() < 0.5);
}

#[test]
fn test_other_variables_clip() {
    // D_Tmrt beyond 70 K, va beyond 17 m/s, and Pa beyond 5 kPa
    assert_eq!(
        utci_kelvin(293.0, 388.0, 50.0, 5.0, 0.0),
        utci_kelvin(293.0, 363.0, 50.0, 5.0, 0.0)
    );
    assert_eq!(
        utci_kelvin(k(20.0), k(20.0), 50.0, 30.0, 0.0),
        utci_kelvin(k(20.0), k(20.0), 50.0, 17.0, 0.0)
    );
    // At 45°C saturation pressure is ~9.6 kPa, so 60 % and 90 % both clip to 5 kPa
    assert_eq!(
        utci_kelvin(k(45.0), k(45.0), 60.0, 1.0, 0.0),
        utci_kelvin(k(45.0), k(45.0), 90.0, 1.0, 0.0)
    );
}

#[test]
fn test_wind_sign_flip_invariance() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let t2: f64 = k(rng.random_range(-45.0..45.0));
        let offset: f64 = rng.random_range(-25.0..60.0);
        let mrt = t2 + offset;
        let r2: f64 = rng.random_range(0.0..100.0);
        let u: f64 = rng.random_range(-20.0..20.0);
        let v: f64 = rng.random_range(-20.0..20.0);
        let base = utci_kelvin(t2, mrt, r2, u, v);
        assert_eq!(base, utci_kelvin(t2, mrt, r2, -u, -v));
        assert_eq!(base, utci_kelvin(t2, mrt, r2, v, u));
    }
}

#[test]
fn test_wind_rotation_invariance() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let t2: f64 = k(rng.random_range(-45.0..45.0));
        let offset: f64 = rng.random_range(-25.0..60.0);
        let mrt = t2 + offset;
        let r2: f64 = rng.random_range(0.0..100.0);
        let speed: f64 = rng.random_range(0.0..20.0);
        let angle: f64 = rng.random_range(0.0..std::f64::consts::TAU);
        let (sin, cos) = angle.sin_cos();

        let base = utci_kelvin(t2, mrt, r2, speed, 0.0);
        let rotated = utci_kelvin(t2, mrt, r2, speed * cos, speed * sin);
        // Rotation preserves the magnitude up to rounding of sin/cos
        assert_relative_eq!(base, rotated, epsilon = 1e-8);
    }
}

#[test]
fn test_zero_radiant_offset() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let t2: f64 = k(rng.random_range(-50.0..50.0));
        let r2: f64 = rng.random_range(0.0..100.0);
        let u: f64 = rng.random_range(-15.0..15.0);
        let v: f64 = rng.random_range(-15.0..15.0);

        let inputs = RegressionInputs::from_raw(t2, t2, r2, u, v).clipped();
        assert_eq!(inputs.d_tmrt, 0.0);

        // Evaluate only the terms without D_Tmrt
        let without_radiant: f64 = UTCI_POLYNOMIAL
            .terms()
            .iter()
            .filter(|term| term.exponents[2] == 0)
            .fold(inputs.ta, |acc, term| acc + term.evaluate(&inputs.as_array()));

        assert_eq!(utci_kelvin(t2, t2, r2, u, v), without_radiant + 273.15);
    }
}

#[test]
fn test_radiant_offset_monotonic_smoke() {
    for t_c in [-20.0, -5.0, 0.0, 10.0, 20.0, 30.0, 35.0] {
        for r2 in [30.0, 60.0, 90.0] {
            for wind in [0.5, 2.0, 5.0, 10.0] {
                let t2 = k(t_c);
                let mut previous = f64::NEG_INFINITY;
                for offset in (-30..=70).step_by(5) {
                    let utci = utci_kelvin(t2, t2 + f64::from(offset), r2, wind, 0.0);
                    assert!(
                        utci > previous,
                        "UTCI not increasing with Tmrt at Ta={t_c}, RH={r2}, va={wind}, D_Tmrt={offset}"
                    );
                    previous = utci;
                }
            }
        }
    }
}

#[test]
fn test_shape_preserved_for_scalar_vector_and_grid() {
    let evaluator = UtciEvaluator::default();
    let values = [298.15, 300.0, 50.0, 1.0, 0.5];

    let scalar = evaluator
        .evaluate_fields(values.map(Field::scalar))
        .unwrap();
    assert!(scalar.shape().is_empty());
    assert_eq!(scalar.as_scalar(), Some(utci_kelvin(298.15, 300.0, 50.0, 1.0, 0.5)));

    let vector = evaluator
        .evaluate_fields(uniform_fields(&[17], values))
        .unwrap();
    assert_eq!(vector.shape(), &[17]);

    let grid = evaluator
        .evaluate_fields(uniform_fields(&[2, 3, 5], values))
        .unwrap();
    assert_eq!(grid.shape(), &[2, 3, 5]);
    assert!(grid
        .as_slice()
        .iter()
        .all(|&v| v == scalar.as_scalar().unwrap()));
}

#[test]
fn test_element_wise_independence() {
    let shape = [4, 6, 5];
    let fields = varied_fields(&shape);
    let expected: Vec<f64> = (0..fields[0].len())
        .map(|i| {
            utci_kelvin(
                fields[0].as_slice()[i],
                fields[1].as_slice()[i],
                fields[2].as_slice()[i],
                fields[3].as_slice()[i],
                fields[4].as_slice()[i],
            )
        })
        .collect();

    let out = UtciEvaluator::default().evaluate_fields(fields).unwrap();
    assert_eq!(out.shape(), &shape);
    assert_eq!(out.as_slice(), expected.as_slice());
}

#[test]
fn test_determinism_and_mode_equivalence() {
    let shape = [64, 80];
    let batch = MeteoBatch::from_fields(varied_fields(&shape)).unwrap();

    let sequential = UtciEvaluator::new(EvaluatorConfig::sequential());
    let parallel = UtciEvaluator::new(EvaluatorConfig {
        parallel_threshold: 1,
        chunk_size: 33,
        ..EvaluatorConfig::default()
    });

    let first = sequential.evaluate_batch(&batch);
    let second = sequential.evaluate_batch(&batch);
    let third = parallel.evaluate_batch(&batch);

    let bits = |f: &Field| f.as_slice().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&first), bits(&second));
    assert_eq!(bits(&first), bits(&third));
}

#[test]
fn test_nan_stays_in_its_element() {
    let mut fields = uniform_fields(&[3, 3], [k(20.0), k(25.0), 50.0, 2.0, 1.0]);
    fields[2].as_mut_slice()[4] = f64::NAN;

    let out = UtciEvaluator::default().evaluate_fields(fields).unwrap();
    for (i, &v) in out.as_slice().iter().enumerate() {
        if i == 4 {
            assert!(v.is_nan());
        } else {
            assert!(v.is_finite());
        }
    }
}

#[test]
fn test_outputs_stay_within_plausible_range() {
    let out = UtciEvaluator::default()
        .evaluate_fields(varied_fields(&[50, 40]))
        .unwrap();
    for &v in out.as_slice() {
        let c = v - 273.15;
        assert!((-90.0..=70.0).contains(&c), "implausible UTCI {c}°C");
    }
}
