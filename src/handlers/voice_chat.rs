use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;

use crate::errors::AppError;
use crate::models::Voice;
use crate::services::speech::AudioUpload;
use crate::services::voice_chat::{self, VoiceChatReply};
use crate::state::AppState;

/// `POST /api/voice-chat` — multipart form with a binary `file` field and a
/// `selectedVoice` field.
pub async fn voice_chat(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut audio: Option<AudioUpload> = None;
    let mut selected_voice: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::InvalidUpload)?
    {
        let name = field.name().map(str::to_string).unwrap_or_default();
        match name.as_str() {
            "file" => {
                // A text field carries no filename; only a real file part
                // counts as a binary upload.
                let filename = match field.file_name() {
                    Some(name) => name.to_string(),
                    None => return Err(AppError::InvalidUpload),
                };
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(|_| AppError::InvalidUpload)?;
                audio = Some(AudioUpload {
                    bytes: bytes.to_vec(),
                    filename,
                    content_type,
                });
            }
            "selectedVoice" => {
                let value = field.text().await.map_err(|_| AppError::InvalidUpload)?;
                selected_voice = Some(value);
            }
            _ => {}
        }
    }

    let audio = audio.ok_or(AppError::InvalidUpload)?;
    let voice = selected_voice
        .as_deref()
        .and_then(Voice::parse)
        .ok_or_else(|| AppError::UnsupportedVoice(selected_voice.unwrap_or_default()))?;

    match voice_chat::process_recording(&state, audio, voice).await? {
        VoiceChatReply::Clarification { audio_base64 } => {
            // Field name kept as the web client expects it, typo included.
            Ok(Json(serde_json::json!({ "base65Audio": audio_base64 })))
        }
        VoiceChatReply::Details { slots } => Ok(Json(serde_json::json!({ "details": slots }))),
    }
}
