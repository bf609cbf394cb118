use std::ffi::CString;

use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::error::{ErrorCode, HEL_OK};

const RESERVED_FIELDS: &[&str] = &["ok", "code", "msg"];

pub struct Envelope {
    map: Map<String, Value>,
}

impl Envelope {
    fn new(map: Map<String, Value>) -> Self {
        Self { map }
    }

    pub fn into_string(self) -> String {
        Value::Object(self.map).to_string()
    }

    // serde_json escapes NUL, so the rendered envelope never contains one.
    pub fn into_cstring(self) -> CString {
        CString::new(self.into_string()).expect("JSON envelopes must not contain NUL bytes")
    }
}

fn header(ok: bool, code: i32, msg: String) -> Envelope {
    let mut map = Map::new();
    map.insert("ok".into(), json!(ok));
    map.insert("code".into(), json!(code));
    map.insert("msg".into(), json!(msg));
    Envelope::new(map)
}

pub fn ok() -> Envelope {
    header(true, HEL_OK, "OK".into())
}

pub fn err(msg_code: ErrorCode, msg: impl Into<String>) -> Envelope {
    header(false, msg_code.code(), msg.into())
}

/// Add `key` to the envelope. Reserved keys (`ok`, `code`, `msg`) and values
/// that fail to serialize leave the envelope unchanged, so this never panics
/// in release builds.
pub fn with_field<T>(mut envelope: Envelope, key: impl Into<String>, value: T) -> Envelope
where
    T: Serialize,
{
    let key = key.into();
    let reserved = RESERVED_FIELDS.contains(&key.as_str());
    debug_assert!(!reserved, "field '{key}' is reserved by the FFI envelope");
    if reserved {
        warn!(%key, "ignoring reserved envelope field");
        return envelope;
    }

    match serde_json::to_value(value) {
        Ok(value) => {
            envelope.map.insert(key, value);
        }
        Err(e) => warn!(%key, error = %e, "dropping unserializable envelope field"),
    }
    envelope
}
