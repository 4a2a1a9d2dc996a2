use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ValidationError;
use crate::validate::FieldReader;

/// Raw text input to the chat pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTextRequest {
    pub text: String,
}

impl ChatTextRequest {
    pub fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new("ChatTextRequest", raw)?;
        let text = fields.required_str("text");
        fields.finish()?;
        Ok(Self { text })
    }

    pub fn to_value(&self) -> Value {
        json!({
            "text": self.text,
        })
    }
}

/// Result of one chat turn: the spoken reply plus what was heard, with the
/// model reply, conversation history, and error populated when available.
///
/// History elements are opaque values; their shape is owned by whatever
/// produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponse {
    pub audio_url: String,
    pub transcribed_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new("ChatResponse", raw)?;
        let audio_url = fields.required_str("audio_url");
        let transcribed_text = fields.required_str("transcribed_text");
        let llm_response = fields.optional_str("llm_response");
        let history = fields.optional_list("history");
        let error = fields.optional_str("error");
        fields.finish()?;
        Ok(Self {
            audio_url,
            transcribed_text,
            llm_response,
            history,
            error,
        })
    }

    /// Wire shape with absent optionals omitted.
    pub fn to_value(&self) -> Value {
        let mut value = json!({
            "audio_url": self.audio_url,
            "transcribed_text": self.transcribed_text,
        });
        if let Some(llm_response) = &self.llm_response {
            value["llm_response"] = json!(llm_response);
        }
        if let Some(history) = &self.history {
            value["history"] = json!(history);
        }
        if let Some(error) = &self.error {
            value["error"] = json!(error);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;

    #[test]
    fn chat_text_parses() {
        let req = ChatTextRequest::parse(&json!({"text": "hello"})).unwrap();
        assert_eq!(req.text, "hello");
        assert_eq!(req.to_value(), json!({"text": "hello"}));
    }

    #[test]
    fn empty_payload_fails_naming_text() {
        let err = ChatTextRequest::parse(&json!({})).unwrap_err();
        assert_eq!(err.record, "ChatTextRequest");
        assert!(matches!(
            err.violations[0],
            Violation::MissingField { field: "text" }
        ));
    }

    #[test]
    fn absent_optionals_read_as_none() {
        let rsp = ChatResponse::parse(&json!({
            "audio_url": "a.mp3",
            "transcribed_text": "hi"
        }))
        .unwrap();
        assert_eq!(rsp.audio_url, "a.mp3");
        assert_eq!(rsp.transcribed_text, "hi");
        assert_eq!(rsp.llm_response, None);
        assert_eq!(rsp.history, None);
        assert_eq!(rsp.error, None);
    }

    #[test]
    fn absence_is_distinct_from_empty() {
        let rsp = ChatResponse::parse(&json!({
            "audio_url": "a.mp3",
            "transcribed_text": "hi"
        }))
        .unwrap();
        assert_ne!(rsp.llm_response, Some(String::new()));
        assert_ne!(rsp.history, Some(Vec::new()));

        let rsp = ChatResponse::parse(&json!({
            "audio_url": "a.mp3",
            "transcribed_text": "hi",
            "llm_response": "",
            "history": []
        }))
        .unwrap();
        assert_eq!(rsp.llm_response, Some(String::new()));
        assert_eq!(rsp.history, Some(Vec::new()));
    }

    #[test]
    fn reports_all_violations_at_once() {
        let err = ChatResponse::parse(&json!({"llm_response": 5})).unwrap_err();
        assert_eq!(err.fields(), vec!["audio_url", "transcribed_text", "llm_response"]);
    }

    #[test]
    fn history_elements_stay_opaque() {
        let rsp = ChatResponse::parse(&json!({
            "audio_url": "a.mp3",
            "transcribed_text": "hi",
            "history": [{"role": "human", "content": "hi"}, "bare string", 7]
        }))
        .unwrap();
        let history = rsp.history.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1], json!("bare string"));
    }

    #[test]
    fn omits_absent_optionals_on_serialize() {
        let rsp = ChatResponse::parse(&json!({
            "audio_url": "a.mp3",
            "transcribed_text": "hi"
        }))
        .unwrap();
        let value = rsp.to_value();
        assert!(value.get("llm_response").is_none());
        assert!(value.get("history").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn round_trips_with_and_without_optionals() {
        let bare = ChatResponse::parse(&json!({
            "audio_url": "a.mp3",
            "transcribed_text": "hi"
        }))
        .unwrap();
        assert_eq!(ChatResponse::parse(&bare.to_value()).unwrap(), bare);

        let full = ChatResponse::parse(&json!({
            "audio_url": "a.mp3",
            "transcribed_text": "hi",
            "llm_response": "hello there",
            "history": [{"role": "human", "content": "hi"}],
            "error": "tts upstream timed out"
        }))
        .unwrap();
        assert_eq!(ChatResponse::parse(&full.to_value()).unwrap(), full);
    }

    #[test]
    fn to_value_matches_the_serialize_derive() {
        let rsp = ChatResponse {
            audio_url: "a.mp3".to_string(),
            transcribed_text: "hi".to_string(),
            llm_response: Some("hello".to_string()),
            history: None,
            error: None,
        };
        assert_eq!(serde_json::to_value(&rsp).unwrap(), rsp.to_value());
    }
}
