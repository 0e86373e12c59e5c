use rolebook_application::MessageEnvelope;
use serde::Serialize;
use ts_rs::TS;

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    message: String,
    timestamp: String,
}

impl From<MessageEnvelope> for ErrorResponse {
    fn from(value: MessageEnvelope) -> Self {
        Self {
            message: value.message,
            timestamp: value.timestamp.to_rfc3339(),
        }
    }
}
