//! Chat stream decoding.
//!
//! The memory service answers questions as a Server-Sent-Events stream of
//! `data: {"type": ..., "payload": ...}` lines. [`SseDecoder`] turns raw
//! chunks into [`ChatEvent`]s without doing any I/O, and [`ChatTranscript`]
//! folds those events into the answer shown to the user.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

/// Body of an ask-stream request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Organization whose memories are searched.
    pub org_id: String,
    /// The user's question.
    pub question: String,
    /// Continues an earlier conversation when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl ChatRequest {
    /// Builds a request, continuing `conversation_id` if given.
    #[must_use]
    pub fn new(org_id: &str, question: &str, conversation_id: Option<&str>) -> Self {
        Self {
            org_id: org_id.to_string(),
            question: question.to_string(),
            conversation_id: conversation_id.map(ToString::to_string),
        }
    }
}

/// A memory cited by an answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Memory title, if the service sent one.
    #[serde(default)]
    pub title: Option<String>,
    /// Any other fields the service attaches.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Citation {
    /// Title for display, `"Memory"` when absent.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Memory")
    }
}

/// Payload of the final event of an answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DonePayload {
    /// Conversation to continue with the next question.
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// Memories the answer drew on. A `null` list reads as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub citations: Vec<Citation>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Payload of an error event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

/// One decoded stream event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum ChatEvent {
    /// Progress text such as "Searching memories...".
    Status(String),
    /// Next piece of the answer.
    Token(String),
    /// Retrieved sources, passed through untyped.
    Sources(Value),
    /// The answer is complete.
    Done(DonePayload),
    /// The service failed to answer.
    Error(ErrorPayload),
}

/// Prefix of SSE lines that carry data.
const DATA_PREFIX: &str = "data: ";

/// Sentinel data value that ends a stream.
const DONE_SENTINEL: &str = "[DONE]";

/// Incremental SSE decoder.
///
/// Chunks may split lines (and UTF-8 sequences) anywhere; incomplete input is
/// buffered until the rest arrives. Lines without the `data: ` prefix, the
/// `[DONE]` sentinel, and data that is not a known event are skipped.
///
/// # Example
///
/// ```rust
/// use palace_capture::chat::{ChatEvent, SseDecoder};
///
/// let mut decoder = SseDecoder::new();
/// assert!(decoder.push("data: {\"type\":\"token\",\"pay").is_empty());
/// let events = decoder.push("load\":\"Hi\"}\n\n");
/// assert_eq!(events, vec![ChatEvent::Token("Hi".into())]);
/// ```
#[derive(Debug, Default)]
pub struct SseDecoder {
    line: String,
    bytes: Vec<u8>,
}

impl SseDecoder {
    /// Creates an empty decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a text chunk, returning every event completed by it.
    pub fn push(&mut self, chunk: &str) -> Vec<ChatEvent> {
        self.line.push_str(chunk);

        let mut events = Vec::new();
        while let Some(newline) = self.line.find('\n') {
            let line: String = self.line.drain(..=newline).collect();
            if let Some(event) = decode_line(&line) {
                events.push(event);
            }
        }
        events
    }

    /// Feeds a byte chunk, holding back a trailing partial UTF-8 sequence.
    ///
    /// Invalid sequences are replaced with U+FFFD.
    pub fn push_bytes(&mut self, chunk: &[u8]) -> Vec<ChatEvent> {
        self.bytes.extend_from_slice(chunk);

        let mut text = String::new();
        loop {
            match std::str::from_utf8(&self.bytes) {
                Ok(valid) => {
                    text.push_str(valid);
                    self.bytes.clear();
                    break;
                }
                Err(err) => {
                    let valid_up_to = err.valid_up_to();
                    text.push_str(&String::from_utf8_lossy(&self.bytes[..valid_up_to]));
                    if let Some(invalid_len) = err.error_len() {
                        text.push(char::REPLACEMENT_CHARACTER);
                        self.bytes.drain(..valid_up_to + invalid_len);
                    } else {
                        self.bytes.drain(..valid_up_to);
                        break;
                    }
                }
            }
        }

        self.push(&text)
    }

    /// Ends the stream, decoding a final line that lacked its newline.
    pub fn finish(mut self) -> Option<ChatEvent> {
        if !self.bytes.is_empty() {
            let rest = String::from_utf8_lossy(&self.bytes).into_owned();
            self.line.push_str(&rest);
        }
        decode_line(&self.line)
    }
}

fn decode_line(line: &str) -> Option<ChatEvent> {
    let data = line.strip_prefix(DATA_PREFIX)?.trim();
    if data == DONE_SENTINEL {
        return None;
    }

    match serde_json::from_str(data) {
        Ok(event) => Some(event),
        Err(err) => {
            trace!(%err, "skipping undecodable stream line");
            None
        }
    }
}

/// Default text for an error event without a message.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Accumulated state of one streamed answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatTranscript {
    /// Answer text so far.
    pub answer: String,
    /// Latest status line, cleared once the first token arrives.
    pub status: Option<String>,
    /// Sources event payload, if one arrived.
    pub sources: Option<Value>,
    /// Conversation to continue, set by the done event.
    pub conversation_id: Option<String>,
    /// Citations from the done event.
    pub citations: Vec<Citation>,
    /// Error message, if the service reported one. An empty message is
    /// replaced by [`DEFAULT_ERROR_MESSAGE`].
    pub error: Option<String>,
    /// Whether the done event arrived.
    pub done: bool,
}

impl ChatTranscript {
    /// Applies one event.
    pub fn apply(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Status(status) => self.status = Some(status),
            ChatEvent::Token(token) => {
                if self.answer.is_empty() {
                    self.status = None;
                }
                self.answer.push_str(&token);
            }
            ChatEvent::Sources(sources) => self.sources = Some(sources),
            ChatEvent::Done(done) => {
                self.conversation_id = done.conversation_id;
                self.citations = done.citations;
                self.done = true;
            }
            ChatEvent::Error(err) => {
                let message = err.message.filter(|m| !m.is_empty());
                self.error = Some(message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()));
            }
        }
    }

    /// The follow-up request for `question` in the same conversation.
    #[must_use]
    pub fn follow_up(&self, org_id: &str, question: &str) -> ChatRequest {
        ChatRequest::new(org_id, question, self.conversation_id.as_deref())
    }
}

impl Extend<ChatEvent> for ChatTranscript {
    fn extend<I: IntoIterator<Item = ChatEvent>>(&mut self, events: I) {
        for event in events {
            self.apply(event);
        }
    }
}
