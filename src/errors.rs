use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// TMDb discovery call failed; carries the upstream status (502 when the
    /// request never reached the upstream).
    #[error("failed to fetch data from TMDb (upstream status {0})")]
    UpstreamUnavailable(u16),

    #[error("invalid file upload")]
    InvalidUpload,

    #[error("unsupported voice: {0}")]
    UnsupportedVoice(String),

    /// Whisper returned a non-success response; both the status and the
    /// upstream error body are surfaced to the caller unchanged.
    #[error("transcription failed (upstream status {status})")]
    TranscriptionFailed {
        status: u16,
        body: serde_json::Value,
    },

    #[error("speech synthesis failed: {0}")]
    SynthesisFailed(String),

    #[error("storage write failed: {0}")]
    StorageWriteFailed(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::UpstreamUnavailable(code) => (
                StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
                serde_json::json!({ "error": "Failed to fetch data from TMDb" }),
            ),
            AppError::InvalidUpload => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "Invalid file upload" }),
            ),
            AppError::UnsupportedVoice(ref voice) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": format!("Unsupported voice: {voice}") }),
            ),
            AppError::TranscriptionFailed { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                serde_json::json!({ "error": body }),
            ),
            AppError::SynthesisFailed(ref msg) => {
                tracing::error!(error = %msg, "speech synthesis failed");
                (
                    StatusCode::BAD_GATEWAY,
                    serde_json::json!({ "error": "Failed to synthesize speech" }),
                )
            }
            AppError::StorageWriteFailed(ref msg) => {
                tracing::error!(error = %msg, "failed to upload audio file");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": "Error uploading audio file" }),
                )
            }
            AppError::Internal(ref e) => {
                tracing::error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
