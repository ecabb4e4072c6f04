//! C ABI for the UTCI evaluator
//!
//! Exposes scalar and batch evaluation plus the thermal stress scale. Batch
//! calls report failures through [`UtciErrorCode`] and a thread-local message
//! available from `utci_get_last_error`.

mod error;
mod helpers;

pub use error::{utci_get_last_error, utci_get_last_error_code, UtciErrorCode};

use error::DefaultUtciError;
use helpers::{clear_last_error, slice_from_raw, track_error};
use utci_core::core_types::units::CELSIUS_KELVIN_OFFSET;
use utci_core::{utci_kelvin, BatchSlices, ThermalStress, UtciEvaluator};

/// Borrowed view over five equal-length input arrays.
///
/// Keep this layout stable for C/C++/C# consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct UtciBatchView {
    /// Air temperature at 2 m (K).
    pub t2: *const f64,
    pub t2_len: usize,

    /// Mean radiant temperature (K).
    pub mrt: *const f64,
    pub mrt_len: usize,

    /// Relative humidity at 2 m (%).
    pub r2: *const f64,
    pub r2_len: usize,

    /// Eastward wind at 10 m (m/s).
    pub u10: *const f64,
    pub u10_len: usize,

    /// Northward wind at 10 m (m/s).
    pub v10: *const f64,
    pub v10_len: usize,
}

/// Compute UTCI (K) for one set of values.
///
/// Out-of-range inputs are clipped; NaN in any input gives NaN.
#[no_mangle]
pub extern "C" fn utci_evaluate(t2: f64, mrt: f64, r2: f64, u10: f64, v10: f64) -> f64 {
    utci_kelvin(t2, mrt, r2, u10, v10)
}

#[no_mangle]
/// Compute UTCI (K) element-wise over a batch.
///
/// Writes `out_len` results into `out`. Elements are evaluated in parallel
/// for large batches; results are identical either way.
///
/// Returns
/// - `UtciErrorCode::Ok` (0) on success with every element of `out` written
/// - `UtciErrorCode::NullPointer` if `view`, `out` or a non-empty field pointer is null
/// - `UtciErrorCode::ShapeMismatch` if a field length differs from `t2_len`
/// - `UtciErrorCode::InvalidParameter` if `out_len` differs from `t2_len`
///
/// `out` is left untouched on error.
///
/// # Safety
///
/// - `view` must point to a valid `UtciBatchView`.
/// - Each field pointer must address as many `double`s as its length says.
/// - `out` must address `out_len` writable `double`s not aliasing the inputs.
///
/// # Example Usage (C)
/// ```c
/// UtciBatchView view = { t2, n, mrt, n, r2, n, u10, n, v10, n };
/// if (utci_evaluate_batch(&view, out, n) != Ok) {
///     fprintf(stderr, "%s\n", utci_get_last_error());
/// }
/// ```
pub unsafe extern "C" fn utci_evaluate_batch(
    view: *const UtciBatchView,
    out: *mut f64,
    out_len: usize,
) -> UtciErrorCode {
    if view.is_null() {
        return track_error(&DefaultUtciError::null_pointer("view"));
    }
    // SAFETY: non-null and valid per the caller contract
    let inputs = match unsafe { batch_slices(&*view) } {
        Ok(inputs) => inputs,
        Err(e) => return track_error(&e),
    };

    let out: &mut [f64] = if out.is_null() {
        if out_len != 0 {
            return track_error(&DefaultUtciError::null_pointer("out"));
        }
        &mut []
    } else {
        // SAFETY: non-null and addresses `out_len` writable values per the caller contract
        unsafe { std::slice::from_raw_parts_mut(out, out_len) }
    };

    match UtciEvaluator::default().evaluate_slices(inputs, out) {
        Ok(()) => {
            clear_last_error();
            UtciErrorCode::Ok
        }
        Err(e) => track_error(&DefaultUtciError::from(e)),
    }
}

/// Borrow the five arrays of `view`.
///
/// # Safety
///
/// Each non-null pointer in `view` must address as many values as its length
/// says, valid for `'a`.
unsafe fn batch_slices<'a>(view: &UtciBatchView) -> Result<BatchSlices<'a>, DefaultUtciError> {
    // SAFETY: forwarded caller contract
    unsafe {
        Ok(BatchSlices::new(
            slice_from_raw(view.t2, view.t2_len, "t2")?,
            slice_from_raw(view.mrt, view.mrt_len, "mrt")?,
            slice_from_raw(view.r2, view.r2_len, "r2")?,
            slice_from_raw(view.u10, view.u10_len, "u10")?,
            slice_from_raw(view.v10, view.v10_len, "v10")?,
        ))
    }
}

/// Thermal stress category of a UTCI value (K).
///
/// Returns the category index from 0 (extreme cold stress) to 9 (extreme heat
/// stress), or -1 for NaN.
#[no_mangle]
pub extern "C" fn utci_thermal_stress(utci_kelvin: f64) -> i32 {
    ThermalStress::from_celsius(utci_kelvin - CELSIUS_KELVIN_OFFSET)
        .map_or(-1, |category| i32::from(category.index()))
}
