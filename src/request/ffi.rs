//! C ABI over the JSON boundary.
//!
//! Strings cross the boundary as NUL-terminated UTF-8. Every string returned
//! by this module must be released with [`ugc_free_string`].

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;

use super::{auto_cluster_json, error_json};
use crate::error::ClusterError;

/// Clusters the tickets in a JSON request.
///
/// Returns the JSON-encoded result, or `{"error": "..."}` when the request
/// is malformed or invalid. Returns null only if `request` is null.
///
/// # Safety
///
/// `request` must be null or point to a valid NUL-terminated string that
/// stays alive for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn ugc_auto_cluster(request: *const c_char) -> *mut c_char {
    if request.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: non-null and NUL-terminated per the contract above.
    let input = unsafe { CStr::from_ptr(request) };
    let body = match input.to_str() {
        Ok(json) => auto_cluster_json(json).unwrap_or_else(|err| error_json(&err)),
        Err(err) => error_json(&ClusterError::Json(err.to_string())),
    };
    into_raw(body)
}

/// Releases a string returned by [`ugc_auto_cluster`].
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by this module that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn ugc_free_string(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: allocated by CString::into_raw in this module.
        drop(unsafe { CString::from_raw(s) });
    }
}

fn into_raw(body: String) -> *mut c_char {
    // serde_json escapes NUL, so encoded bodies never contain one
    CString::new(body).map_or(ptr::null_mut(), CString::into_raw)
}
