//! Typed messaging between the page, the background context and the popup.
//!
//! Handlers are registered explicitly with [`listen`], which returns an
//! [`Endpoint`]. Messages cross the endpoint as JSON, the same shapes the
//! browser runtime carries:
//!
//! - `{"action": "get"}` asks a page for its comments
//! - `{"action": "set", "comments": [...]}` reports a page's comments
//!
//! ## Module Structure
//!
//! - `content`: page-side handler (scan on load, answer `get`)
//! - `background`: badge and icon state per tab
//! - `popup`: popup view built from a `get` reply

pub mod background;
pub mod content;
pub mod popup;

use std::{future::Future, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use crate::core::TaggedComment;

pub use background::{Background, Badge, Icon};
pub use content::ContentScript;
pub use popup::{PopupEntry, PopupView, open_popup};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Message {
    Get,
    Set { comments: Vec<TaggedComment> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(pub u32);

/// Who sent a message. Messages from a page carry its tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sender {
    pub tab: Option<TabId>,
}

impl Sender {
    pub fn tab(tab: TabId) -> Self {
        Self { tab: Some(tab) }
    }

    pub fn extension() -> Self {
        Self { tab: None }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MessagingError {
    #[error("could not establish connection: receiving end does not exist")]
    NoReceiver,
    #[error("message channel closed before a response was received")]
    ChannelClosed,
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Something that reacts to messages. Returning `Some` sends a reply.
pub trait Handler: Send + Sync + 'static {
    fn on_message(
        &self,
        message: Message,
        sender: Sender,
    ) -> impl Future<Output = Option<Vec<TaggedComment>>> + Send;
}

struct Envelope {
    payload: Value,
    sender: Sender,
    reply: oneshot::Sender<Option<Value>>,
}

/// Sending side of a registered handler.
#[derive(Debug, Clone)]
pub struct Endpoint {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl Endpoint {
    /// An endpoint with nobody listening, like a tab where no content
    /// context was injected.
    pub fn detached() -> Self {
        let (tx, _rx) = mpsc::unbounded_channel();
        Self { tx }
    }

    /// Send a message and wait for the handler to finish with it.
    ///
    /// The reply channel stays open until the handler's future completes,
    /// so asynchronous work (fetching, scanning) finishes before the reply.
    pub async fn send(
        &self,
        message: &Message,
        sender: Sender,
    ) -> Result<Option<Value>, MessagingError> {
        let payload = serde_json::to_value(message)?;
        let (reply, response) = oneshot::channel();

        self.tx
            .send(Envelope {
                payload,
                sender,
                reply,
            })
            .map_err(|_| MessagingError::NoReceiver)?;

        response.await.map_err(|_| MessagingError::ChannelClosed)
    }
}

/// Register a handler. Each message is handled on its own task.
///
/// Must be called from within a tokio runtime.
pub fn listen<H: Handler>(handler: Arc<H>) -> Endpoint {
    let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();

    tokio::spawn(async move {
        while let Some(envelope) = rx.recv().await {
            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                let reply = dispatch(handler.as_ref(), envelope.payload, envelope.sender).await;
                let _ = envelope.reply.send(reply);
            });
        }
    });

    Endpoint { tx }
}

async fn dispatch<H: Handler>(handler: &H, payload: Value, sender: Sender) -> Option<Value> {
    let message: Message = match serde_json::from_value(payload) {
        Ok(message) => message,
        Err(error) => {
            warn!(%error, "ignoring malformed message");
            return None;
        }
    };

    let reply = handler.on_message(message, sender).await?;
    match serde_json::to_value(reply) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(%error, "cannot encode reply");
            None
        }
    }
}
