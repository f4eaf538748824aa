// ABOUTME: Recording transport double for adapter unit tests
// ABOUTME: Captures delivered payloads so tests can assert on content types and bodies

use std::sync::Mutex;

use crate::transport::{ContentType, Payload, Transport};

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub payload: Payload,
    pub content_type: ContentType,
    pub name: String,
}

#[derive(Default)]
pub(crate) struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_calls(&self) -> Vec<RecordedCall> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

impl Transport for RecordingTransport {
    fn post_file(&self, payload: Payload, content_type: ContentType, name: &str) {
        self.calls.lock().unwrap().push(RecordedCall {
            payload,
            content_type,
            name: name.to_string(),
        });
    }
}
