use serde::de::DeserializeOwned;
use web_sys::{Storage, Window};

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

// Host builds (tests, SSR) never have a browser window.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, String> {
    Err("No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn read_item(key: &str) -> Result<Option<String>, String> {
    local_storage()?
        .get_item(key)
        .map_err(|_| format!("Failed to read {} from localStorage", key))
}

/// Reads and decodes a JSON value stored under `key`.
///
/// `Ok(None)` means the key is not set; a stored value that does not decode is an error.
pub fn read_json<T: DeserializeOwned>(key: &str) -> Result<Option<T>, String> {
    match read_item(key)? {
        Some(raw) => decode_json(&raw).map(Some),
        None => Ok(None),
    }
}

pub fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_str(raw).map_err(|e| format!("Invalid JSON: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        id: String,
    }

    #[test]
    fn decode_json_reports_invalid_payloads() {
        let ok: Sample = decode_json(r#"{"id":"u1"}"#).unwrap();
        assert_eq!(ok, Sample { id: "u1".into() });

        let err = decode_json::<Sample>("{not json").unwrap_err();
        assert!(err.starts_with("Invalid JSON"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn host_builds_have_no_local_storage() {
        assert!(local_storage().is_err());
        assert!(read_json::<Sample>("user").is_err());
    }
}
