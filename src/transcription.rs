use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ValidationError;
use crate::validate::FieldReader;

/// Echoed audio plus the transcription it was produced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EchoResponse {
    pub audio_url: String,
    pub transcription: String,
}

impl EchoResponse {
    pub fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new("EchoResponse", raw)?;
        let audio_url = fields.required_str("audio_url");
        let transcription = fields.required_str("transcription");
        fields.finish()?;
        Ok(Self {
            audio_url,
            transcription,
        })
    }

    pub fn to_value(&self) -> Value {
        json!({
            "audio_url": self.audio_url,
            "transcription": self.transcription,
        })
    }
}

/// Transcription-only response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleTranscriptionResponse {
    pub transcription: String,
}

impl SimpleTranscriptionResponse {
    pub fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new("SimpleTranscriptionResponse", raw)?;
        let transcription = fields.required_str("transcription");
        fields.finish()?;
        Ok(Self { transcription })
    }

    pub fn to_value(&self) -> Value {
        json!({
            "transcription": self.transcription,
        })
    }
}
