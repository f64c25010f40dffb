use std::sync::Arc;

use base64::Engine;

use crate::errors::AppError;
use crate::models::{Slots, Voice};
use crate::services::dialog::{self, DialogOutcome};
use crate::services::speech::AudioUpload;
use crate::state::AppState;

const AUDIO_CONTENT_TYPE: &str = "audio/mp3";

/// What the voice-chat endpoint hands back to the client.
#[derive(Debug)]
pub enum VoiceChatReply {
    /// Synthesized clarification audio, base64-encoded.
    Clarification { audio_base64: String },
    /// The extracted search parameters, ready for a discovery query.
    Details { slots: Slots },
}

/// Transcribe a recording, extract search slots, and either answer with the
/// slots or with a spoken follow-up question for whatever is missing.
pub async fn process_recording(
    state: &Arc<AppState>,
    audio: AudioUpload,
    voice: Voice,
) -> Result<VoiceChatReply, AppError> {
    let transcript = state.speech.transcribe(audio).await?;
    tracing::info!(transcript = %transcript, "transcription complete");

    let slots = state.extractor.extract(&transcript);

    match dialog::decide(slots) {
        DialogOutcome::NeedsClarification { prompt } => {
            tracing::info!(voice = voice.as_str(), "requesting clarification");
            let mp3 = state.speech.synthesize(&prompt, voice).await?;
            let audio_base64 = base64::engine::general_purpose::STANDARD.encode(&mp3);

            state
                .storage
                .put_object(&state.config.storage_object_key, mp3, AUDIO_CONTENT_TYPE)
                .await?;

            Ok(VoiceChatReply::Clarification { audio_base64 })
        }
        DialogOutcome::Complete { slots } => Ok(VoiceChatReply::Details { slots }),
    }
}
