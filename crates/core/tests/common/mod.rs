//! Shared helpers for integration tests
#![allow(dead_code)]

use ctor::ctor;
use utci_core::Field;

/// Install a test subscriber once per test binary; filter with `RUST_LOG`
#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Celsius to Kelvin
pub fn k(celsius: f64) -> f64 {
    celsius + 273.15
}

/// Five fields of `shape`, each filled with the corresponding value
pub fn uniform_fields(shape: &[usize], values: [f64; 5]) -> [Field; 5] {
    values.map(|v| Field::filled(shape, v))
}

/// A grid of varied but physical conditions, in batch order
#[allow(clippy::cast_precision_loss)]
pub fn varied_fields(shape: &[usize]) -> [Field; 5] {
    let len: usize = shape.iter().product();
    let mut t2 = Vec::with_capacity(len);
    let mut mrt = Vec::with_capacity(len);
    let mut r2 = Vec::with_capacity(len);
    let mut u10 = Vec::with_capacity(len);
    let mut v10 = Vec::with_capacity(len);
    for i in 0..len {
        let x = i as f64;
        t2.push(k(-45.0 + (x * 7.3) % 95.0));
        mrt.push(t2[i] + (x * 3.1) % 60.0 - 20.0);
        r2.push((x * 11.7) % 100.0);
        u10.push((x * 0.37) % 12.0 - 6.0);
        v10.push((x * 0.53) % 10.0 - 5.0);
    }
    [t2, mrt, r2, u10, v10].map(|data| Field::new(shape.to_vec(), data).unwrap())
}
