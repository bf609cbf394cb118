//! C ABI for HEL-420.
//!
//! Strings cross the boundary as NUL-terminated UTF-8. Strings returned by
//! this library must be released with [`hel420_free_string`].

mod error;
mod ffi_json;

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use hel420_corelib::{hel420_digest, hel420_hash, Hel420Digest, ALGORITHM, DIGEST_LEN};
use tracing::debug;

pub use error::{ErrorCode, HEL_ERR_INVALID_ARG, HEL_ERR_MISMATCH, HEL_OK};
pub use ffi_json::{err, ok, with_field, Envelope};

/// Buffer size `hel420_hash_hex` needs: 64 hex characters plus NUL.
pub const HEL_HEX_BUF_LEN: usize = DIGEST_LEN * 2 + 1;

static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();

unsafe fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, (ErrorCode, String)> {
    if ptr.is_null() {
        return Err((ErrorCode::InvalidArg, format!("{what} is null")));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|e| (ErrorCode::InvalidArg, format!("{what} is not UTF-8: {e}")))
}

/// Library version as a static NUL-terminated string. Do not free.
#[no_mangle]
pub extern "C" fn hel420_version() -> *const c_char {
    VERSION.as_ptr().cast()
}

/// Write the hex digest of `input` plus a trailing NUL into `out_hex`.
///
/// # Safety
/// `input` must be null or a valid NUL-terminated string. `out_hex` must be
/// null or point to at least `out_len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn hel420_hash_hex(
    input: *const c_char,
    out_hex: *mut c_char,
    out_len: usize,
) -> i32 {
    if out_hex.is_null() || out_len < HEL_HEX_BUF_LEN {
        debug!(out_len, "hex output buffer missing or too small");
        return HEL_ERR_INVALID_ARG;
    }
    let input = match read_str(input, "input") {
        Ok(s) => s,
        Err((code, msg)) => {
            debug!(%msg, "hel420_hash_hex rejected input");
            return code.code();
        }
    };
    let hex = hel420_hash(input);
    ptr::copy_nonoverlapping(hex.as_ptr(), out_hex.cast::<u8>(), hex.len());
    *out_hex.add(hex.len()) = 0;
    HEL_OK
}

/// Hash `input` and return a JSON envelope:
/// `{"ok":true,"code":0,"msg":"OK","algorithm":"HEL-420","digest":"<hex>"}`.
/// Failures return `ok:false` with the error code and message.
///
/// # Safety
/// `input` must be null or a valid NUL-terminated string. The returned pointer
/// must be released with [`hel420_free_string`].
#[no_mangle]
pub unsafe extern "C" fn hel420_hash_json(input: *const c_char) -> *mut c_char {
    let envelope = match read_str(input, "input") {
        Ok(s) => {
            let digest = hel420_digest(s);
            let envelope = with_field(ok(), "algorithm", ALGORITHM);
            with_field(envelope, "digest", digest)
        }
        Err((code, msg)) => err(code, msg),
    };
    envelope.into_cstring().into_raw()
}

/// Compare the digest of `input` against `expected_hex`.
///
/// Returns `HEL_OK` on match, `HEL_ERR_MISMATCH` on mismatch and
/// `HEL_ERR_INVALID_ARG` for null, non-UTF-8 or unparsable arguments.
///
/// # Safety
/// Both pointers must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn hel420_verify(input: *const c_char, expected_hex: *const c_char) -> i32 {
    let (input, expected) = match (read_str(input, "input"), read_str(expected_hex, "expected")) {
        (Ok(i), Ok(e)) => (i, e),
        (Err((code, msg)), _) | (_, Err((code, msg))) => {
            debug!(%msg, "hel420_verify rejected argument");
            return code.code();
        }
    };
    let expected: Hel420Digest = match expected.parse() {
        Ok(d) => d,
        Err(e) => {
            debug!(error = %e, "hel420_verify got unparsable digest");
            return HEL_ERR_INVALID_ARG;
        }
    };
    if hel420_digest(input) == expected {
        HEL_OK
    } else {
        HEL_ERR_MISMATCH
    }
}

/// Release a string returned by this library. Null is ignored.
///
/// # Safety
/// `s` must be null or a pointer previously returned by [`hel420_hash_json`]
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn hel420_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
