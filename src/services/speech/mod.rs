pub mod openai;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::Voice;

/// An uploaded audio recording, as received from the multipart form.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: String,
}

#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Transcribe a recording to text. Upstream failures carry the
    /// collaborator's status code and error body.
    async fn transcribe(&self, audio: AudioUpload) -> Result<String, AppError>;

    /// Synthesize spoken audio (MP3 bytes) for the given text.
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Vec<u8>, AppError>;
}
