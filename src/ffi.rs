//! C-ABI export of the squaring routine.
//!
//! The symbol follows the Fortran convention: a trailing underscore and the
//! argument passed by reference. C and C++ callers declare it as
//!
//! ```c
//! extern "C" double squared_(double* i);
//! ```
//!
//! (see `include/squared.h`).

use crate::squaring;
use tracing::{debug, warn};

/// Square the value behind `i`.
///
/// The pointee is only read. A null pointer yields `NaN`.
///
/// # Safety
///
/// `i` must be null or point to a properly aligned, initialized `f64` that
/// stays valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn squared_(i: *const f64) -> f64 {
    if i.is_null() {
        warn!("squared_ called with a null pointer");
        return f64::NAN;
    }
    let x = *i;
    let out = squaring::squared(x);
    debug!(input = x, output = out, "squared_");
    out
}

/// Safe wrapper that goes through the exported symbol by reference.
pub fn squared_by_ref(x: &f64) -> f64 {
    // SAFETY: a shared reference is non-null, aligned and initialized.
    unsafe { squared_(x as *const f64) }
}
