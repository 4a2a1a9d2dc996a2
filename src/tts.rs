use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ValidationError;
use crate::validate::FieldReader;

/// Request to synthesize speech from text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextToSpeechRequest {
    pub text: String,
    #[serde(rename = "voiceId")]
    pub voice_id: String,
}

fn default_voice_id() -> String {
    "en-US-charles".to_string()
}

impl TextToSpeechRequest {
    pub fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new("TextToSpeechRequest", raw)?;
        let text = fields.required_str("text");
        let voice_id = fields.str_or_else("voiceId", default_voice_id);
        fields.finish()?;
        Ok(Self { text, voice_id })
    }

    pub fn to_value(&self) -> Value {
        json!({
            "text": self.text,
            "voiceId": self.voice_id,
        })
    }
}

/// Response carrying the URL of the generated audio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextToSpeechResponse {
    pub audio_url: String,
}

impl TextToSpeechResponse {
    pub fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new("TextToSpeechResponse", raw)?;
        let audio_url = fields.required_str("audio_url");
        fields.finish()?;
        Ok(Self { audio_url })
    }

    pub fn to_value(&self) -> Value {
        json!({
            "audio_url": self.audio_url,
        })
    }
}
