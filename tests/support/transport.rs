use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kursbot::error::{Error, Result};
use kursbot::port::{ChatTransport, OutboundMessage};

/// Thread-safe reply collector for delivery assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
    fail: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport that rejects every message after recording it.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().expect("lock sent messages").clone()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().expect("lock sent messages").len()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send(&self, message: OutboundMessage) -> Result<()> {
        self.sent
            .lock()
            .expect("lock sent messages")
            .push(message);

        if self.fail {
            return Err(Error::Telegram("chat not found".to_string()));
        }
        Ok(())
    }
}
