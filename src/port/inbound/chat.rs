//! Inbound chat events.

/// One message delivered by a chat transport.
///
/// `text` is `None` for updates that carry no text payload (stickers,
/// photos, service messages).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub chat_id: i64,
    pub text: Option<String>,
}

impl InboundEvent {
    /// Event carrying a text message.
    #[must_use]
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: Some(text.into()),
        }
    }

    /// Event without a text payload.
    #[must_use]
    pub const fn empty(chat_id: i64) -> Self {
        Self {
            chat_id,
            text: None,
        }
    }
}
