use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{AudioUpload, SpeechProvider};
use crate::errors::AppError;
use crate::models::Voice;

const TRANSCRIPTION_MODEL: &str = "whisper-1";
const SYNTHESIS_MODEL: &str = "tts-1";

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

pub struct OpenAiSpeechProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiSpeechProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SpeechProvider for OpenAiSpeechProvider {
    async fn transcribe(&self, audio: AudioUpload) -> Result<String, AppError> {
        let part = reqwest::multipart::Part::bytes(audio.bytes)
            .file_name(audio.filename)
            .mime_str(&audio.content_type)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid audio content type: {e}")))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", TRANSCRIPTION_MODEL);

        let resp = self
            .client
            .post(format!("{}/v1/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::TranscriptionFailed {
                status: 502,
                body: json!({ "message": format!("failed to call transcription API: {e}") }),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body: serde_json::Value = resp
                .json()
                .await
                .unwrap_or_else(|_| json!({ "message": "unreadable error body" }));
            return Err(AppError::TranscriptionFailed {
                status: status.as_u16(),
                body,
            });
        }

        let data: TranscriptionResponse = resp.json().await.map_err(|e| {
            AppError::Internal(anyhow::anyhow!("failed to parse transcription response: {e}"))
        })?;

        Ok(data.text)
    }

    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Vec<u8>, AppError> {
        let body = json!({
            "model": SYNTHESIS_MODEL,
            "voice": voice.as_str(),
            "input": text,
        });

        let resp = self
            .client
            .post(format!("{}/v1/audio/speech", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::SynthesisFailed(format!("failed to call speech API: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(AppError::SynthesisFailed(format!(
                "speech API error ({status}): {detail}"
            )));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| AppError::SynthesisFailed(format!("failed to read audio body: {e}")))?;

        Ok(bytes.to_vec())
    }
}
