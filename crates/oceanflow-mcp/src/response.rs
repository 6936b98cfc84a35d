//! Response envelope helpers
//!
//! Every tool answers with the same envelope: success is the payload as
//! pretty-printed JSON (two-space indentation), failure is the cause
//! tagged with the operation name so the caller can tell which tool
//! misbehaved.

use serde::Serialize;
use std::fmt::Display;

/// Serialize a payload as the success side of the envelope
pub(crate) fn success<T: Serialize>(operation: &str, data: &T) -> Result<String, String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| failure(&format!("{} (JSON marshaling)", operation), e))
}

/// Tag a failure with the operation it belongs to
pub(crate) fn failure(operation: &str, err: impl Display) -> String {
    format!("{}: {}", operation, err)
}

/// Confirmation payload for operations whose API response has no body
pub(crate) fn status_message(operation: &str, message: String) -> Result<String, String> {
    success(
        operation,
        &serde_json::json!({
            "status": "success",
            "message": message,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_pretty_prints_with_two_spaces() {
        let payload = serde_json::json!({"name": "web-01", "id": 42});
        let out = success("get_droplet", &payload).unwrap();
        assert!(out.contains("\n  \"id\": 42"));
        assert!(out.starts_with("{\n"));
        assert!(out.ends_with('}'));
    }

    #[test]
    fn test_failure_tags_operation() {
        let msg = failure("delete_firewall", "404 not_found: so sorry");
        assert_eq!(msg, "delete_firewall: 404 not_found: so sorry");
    }

    #[test]
    fn test_status_message_shape() {
        let out = status_message("delete_droplet", "Droplet 42 deleted successfully".to_string())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "Droplet 42 deleted successfully");
    }
}
