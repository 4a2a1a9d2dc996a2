//! Wire-boundary schemas for the vaidol speech/chat backend.
//!
//! Each record validates a decoded JSON payload in a single pass, reporting
//! every violation at once, and serializes back to its wire shape.

pub mod chat;
pub mod error;
pub mod transcription;
pub mod tts;

mod validate;

pub use chat::{ChatResponse, ChatTextRequest};
pub use error::{ValidationError, Violation};
pub use transcription::{EchoResponse, SimpleTranscriptionResponse};
pub use tts::{TextToSpeechRequest, TextToSpeechResponse};
