use crate::error::{with_last_error_mut, DefaultUtciError, UtciErrorCode, UtciFfiError};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing the `UtciFfiError` trait.
pub(crate) fn set_last_error(error: &impl UtciFfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl UtciFfiError) -> UtciErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful batch operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = UtciErrorCode::Ok;
    });
}

/// Borrow a C array as a slice.
///
/// A null pointer is accepted only together with `len == 0`.
///
/// # Safety
///
/// If non-null, `ptr` must point to `len` initialised `f64` values that stay
/// valid and unmodified for `'a`.
pub(crate) unsafe fn slice_from_raw<'a>(
    ptr: *const f64,
    len: usize,
    param_name: &str,
) -> Result<&'a [f64], DefaultUtciError> {
    if ptr.is_null() {
        if len == 0 {
            return Ok(&[]);
        }
        return Err(DefaultUtciError::null_pointer(param_name));
    }
    // SAFETY: caller guarantees `ptr` addresses `len` valid values
    Ok(unsafe { std::slice::from_raw_parts(ptr, len) })
}
