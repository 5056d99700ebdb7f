use serde::{Deserialize, Serialize};

/// Method name a caller uses on the messaging channel to request a save.
///
/// This string, together with the argument names of [`SaveFileRequest`],
/// is the bit-exact contract with the UI layer.
pub const SAVE_FILE_METHOD: &str = "saveFile";

/// MIME type substituted when the caller does not provide one.
pub const WILDCARD_MIME: &str = "*/*";

// --- Incoming Requests ---

/// Arguments of a `saveFile` call as they arrive over the channel.
///
/// All fields are optional at the wire level so that a missing argument is
/// representable; presence of `file_name` and `bytes` is enforced by the
/// request handler, not by deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveFileRequest {
    /// Suggested file name shown in the destination picker. Required.
    pub file_name: Option<String>,
    /// Base64-encoded content (standard alphabet, padded). Required.
    pub bytes: Option<String>,
    /// MIME type constraining the picker; defaults to [`WILDCARD_MIME`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Represents all possible requests a caller can send to the bridge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Request {
    SaveFile(SaveFileRequest),
}

// --- Outgoing Responses ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveResultResponse {
    /// Identifier of the written destination, or `None` when the user
    /// dismissed the picker. Cancellation is a successful outcome.
    pub destination: Option<String>,
}

/// Error codes surfaced to the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorCode {
    /// `fileName` or `bytes` was missing from the request.
    #[serde(rename = "INVALID_ARGS")]
    InvalidArgs,
    /// Decoding the content or writing to the destination failed.
    #[serde(rename = "SAVE_ERROR")]
    SaveError,
    /// The channel carried a method this bridge does not handle.
    #[serde(rename = "NOT_IMPLEMENTED")]
    NotImplemented,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgs => "INVALID_ARGS",
            ErrorCode::SaveError => "SAVE_ERROR",
            ErrorCode::NotImplemented => "NOT_IMPLEMENTED",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

/// Represents all possible responses the bridge sends back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Response {
    SaveResult(SaveResultResponse),
    Error(ErrorResponse),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_file_arguments_use_camel_case() {
        let req = Request::SaveFile(SaveFileRequest {
            file_name: Some("report.pdf".to_string()),
            bytes: Some("JVBERi0xLjQ=".to_string()),
            mime_type: Some("application/pdf".to_string()),
        });
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "SaveFile");
        assert_eq!(json["fileName"], "report.pdf");
        assert_eq!(json["bytes"], "JVBERi0xLjQ=");
        assert_eq!(json["mimeType"], "application/pdf");
    }

    #[test]
    fn missing_arguments_still_deserialize() {
        let req: SaveFileRequest = serde_json::from_str(r#"{"bytes":"aGk="}"#).unwrap();
        assert_eq!(req.file_name, None);
        assert_eq!(req.bytes.as_deref(), Some("aGk="));
        assert_eq!(req.mime_type, None);
    }

    #[test]
    fn error_codes_keep_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::InvalidArgs).unwrap(),
            r#""INVALID_ARGS""#
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::SaveError).unwrap(),
            r#""SAVE_ERROR""#
        );
        assert_eq!(ErrorCode::SaveError.to_string(), "SAVE_ERROR");
    }

    #[test]
    fn cancelled_result_serializes_null_destination() {
        let resp = Response::SaveResult(SaveResultResponse { destination: None });
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["destination"].is_null());
    }
}
