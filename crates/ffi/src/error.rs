use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;
use utci_core::UtciError;

/// Common interface for errors crossing the FFI boundary.
///
/// - `code()` - the error code handed back to C
/// - `msg()` - the diagnostic message stored for `utci_get_last_error`
pub(crate) trait UtciFfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> UtciErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `UtciFfiError` for the batch entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultUtciError {
    code: UtciErrorCode,
    msg: String,
}

impl DefaultUtciError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"view"`, `"out"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: UtciErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl From<UtciError> for DefaultUtciError {
    fn from(error: UtciError) -> Self {
        let code = match error {
            UtciError::ShapeMismatch { .. } => UtciErrorCode::ShapeMismatch,
            UtciError::InvalidShape { .. } | UtciError::OutputLength { .. } => {
                UtciErrorCode::InvalidParameter
            }
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl UtciFfiError for DefaultUtciError {
    fn code(&self) -> UtciErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by UTCI functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtciErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// An input field's length differs from the length of `t2`.
    ShapeMismatch = 2,

    /// Invalid parameter passed to function, such as a mis-sized output buffer.
    InvalidParameter = 3,
}

thread_local! {
    /// Most recent FFI error on this thread (C string, error code).
    /// The `CString` is owned here so the pointer handed to C stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, UtciErrorCode)> = const { RefCell::new((None, UtciErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, UtciErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, UtciErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread sees only its own failures.
///
/// # Lifetime
/// The returned pointer is valid until the next batch call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// UtciErrorCode err = utci_evaluate_batch(&view, out, n);
/// if (err != Ok) {
///     const char* error = utci_get_last_error();
///     if (error) {
///         fprintf(stderr, "UTCI batch failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn utci_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns:
/// - `UtciErrorCode::Ok` (0) if the last call on this thread succeeded
/// - The specific error code from the last failed operation
#[no_mangle]
pub extern "C" fn utci_get_last_error_code() -> UtciErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
