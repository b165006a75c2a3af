//! `request.json` body handling
//!
//! JSON request bodies are stored parsed under `raw_json_formatted` so that
//! version control diffs them line by line. Import turns them back into the
//! raw string.

use crate::model::Request;
use crate::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Key that replaces `raw` for JSON bodies on disk.
pub const RAW_JSON_FORMATTED: &str = "raw_json_formatted";

/// On-disk form of a request.
///
/// Returns the JSON value to write and, when a declared JSON body does not
/// parse, the parse error message. The raw text is kept in that case.
pub fn request_to_disk(request: &Request) -> Result<(Value, Option<String>)> {
    let mut value = serde_json::to_value(request)?;

    let raw = match request.body.as_ref().and_then(|b| b.raw.as_deref()) {
        Some(raw) if !raw.is_empty() && request.declares_json() => raw,
        _ => return Ok((value, None)),
    };

    let parsed = match serde_json::from_str::<Value>(raw) {
        Ok(parsed) => parsed,
        Err(e) => return Ok((value, Some(e.to_string()))),
    };

    if let Some(body) = value.get_mut("body").and_then(Value::as_object_mut) {
        body.remove("raw");
        body.insert(RAW_JSON_FORMATTED.to_string(), parsed);
    }
    Ok((value, None))
}

/// Rebuild a request from the content of `request.json` at `path`.
pub fn request_from_disk(path: &Path, mut value: Value) -> Result<Request> {
    if let Some(body) = value.get_mut("body").and_then(Value::as_object_mut) {
        if let Some(formatted) = body.remove(RAW_JSON_FORMATTED) {
            let raw = serde_json::to_string(&formatted)?;
            body.insert("raw".to_string(), Value::String(raw));
        }
    }

    serde_json::from_value(value).map_err(|e| Error::corrupt(path, e))
}
