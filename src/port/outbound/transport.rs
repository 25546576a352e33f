//! Chat transport port for reply delivery.

use async_trait::async_trait;

use crate::error::Result;

/// Reply keyboard shown under the input field, one row per inner vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyMenu {
    pub rows: Vec<Vec<String>>,
}

impl ReplyMenu {
    /// Menu with one button per row.
    #[must_use]
    pub fn single_column<I, S>(buttons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: buttons.into_iter().map(|b| vec![b.into()]).collect(),
        }
    }

    /// All button captions in display order.
    pub fn buttons(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

/// Reply addressed to one chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub chat_id: i64,
    pub text: String,
    pub menu: Option<ReplyMenu>,
}

impl OutboundMessage {
    /// Plain text reply without a menu.
    #[must_use]
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            menu: None,
        }
    }

    /// Attach a reply menu.
    #[must_use]
    pub fn with_menu(mut self, menu: ReplyMenu) -> Self {
        self.menu = Some(menu);
        self
    }
}

/// Delivers replies to chats.
///
/// # Errors
///
/// [`send`](Self::send) returns an error when the transport rejects or fails
/// to deliver the message.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, message: OutboundMessage) -> Result<()>;
}
