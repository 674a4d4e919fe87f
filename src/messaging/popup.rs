//! Popup view: comments grouped by kind, rendered as plain text.

use serde::Serialize;
use tracing::warn;

use crate::core::{CommentKind, TaggedComment};
use crate::messaging::{Endpoint, Message, Sender};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupEntry {
    pub text: String,
    pub origin: String,
}

/// Three fixed groups. Entries keep the order they were reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PopupView {
    pub html: Vec<PopupEntry>,
    pub css: Vec<PopupEntry>,
    pub js: Vec<PopupEntry>,
}

impl PopupView {
    pub fn from_comments<'a>(comments: impl IntoIterator<Item = &'a TaggedComment>) -> Self {
        let mut view = Self::default();
        for comment in comments {
            let entry = PopupEntry {
                text: comment.text().to_string(),
                origin: comment.origin().to_string(),
            };
            view.group_mut(comment.kind()).push(entry);
        }
        view
    }

    /// Build a view from wire strings. Strings that do not decode are
    /// skipped.
    pub fn from_wire(encoded: &[String]) -> Self {
        let comments: Vec<TaggedComment> = encoded
            .iter()
            .filter_map(|entry| match TaggedComment::decode(entry) {
                Ok(comment) => Some(comment),
                Err(error) => {
                    warn!(%error, entry = %entry, "skipping undecodable comment");
                    None
                }
            })
            .collect();
        Self::from_comments(&comments)
    }

    pub fn entries(&self, kind: CommentKind) -> &[PopupEntry] {
        match kind {
            CommentKind::Html => &self.html,
            CommentKind::Css => &self.css,
            CommentKind::Js => &self.js,
        }
    }

    fn group_mut(&mut self, kind: CommentKind) -> &mut Vec<PopupEntry> {
        match kind {
            CommentKind::Html => &mut self.html,
            CommentKind::Css => &mut self.css,
            CommentKind::Js => &mut self.js,
        }
    }

    pub fn total(&self) -> usize {
        self.html.len() + self.css.len() + self.js.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Ask the page for its comments and build the popup.
///
/// Any messaging failure (no page context, closed channel, a reply that is
/// not a list of strings) ends in the empty view.
pub async fn open_popup(page: &Endpoint) -> PopupView {
    let reply = match page.send(&Message::Get, Sender::extension()).await {
        Ok(Some(reply)) => reply,
        Ok(None) => return PopupView::default(),
        Err(error) => {
            warn!(%error, "error requesting comments from page");
            return PopupView::default();
        }
    };

    match serde_json::from_value::<Vec<String>>(reply) {
        Ok(encoded) => PopupView::from_wire(&encoded),
        Err(error) => {
            warn!(%error, "unexpected reply shape");
            PopupView::default()
        }
    }
}
