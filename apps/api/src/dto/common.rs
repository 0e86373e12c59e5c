use rolebook_application::MessageEnvelope;
use serde::Serialize;
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Message paired with the instant it was produced (UTC+7, RFC 3339).
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/message-response.ts"
)]
pub struct MessageResponse {
    pub message: String,
    pub timestamp: String,
}

impl From<MessageEnvelope> for MessageResponse {
    fn from(value: MessageEnvelope) -> Self {
        Self {
            message: value.message,
            timestamp: value.timestamp.to_rfc3339(),
        }
    }
}
