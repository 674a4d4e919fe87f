//! Background context: keeps the toolbar badge and icon of each tab.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::TaggedComment;
use crate::messaging::{Handler, Message, Sender, TabId};

pub const COMMENTS_FOUND_ICON: &str = "/assets/images/comments_found.png";
pub const NO_COMMENTS_ICON: &str = "/assets/images/no_comments_found.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    CommentsFound,
    NoneFound,
}

impl Icon {
    pub fn path(self) -> &'static str {
        match self {
            Icon::CommentsFound => COMMENTS_FOUND_ICON,
            Icon::NoneFound => NO_COMMENTS_ICON,
        }
    }
}

impl Serialize for Icon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

/// Badge text is the comment count, or empty when there are none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: String,
    pub icon: Icon,
}

impl Badge {
    pub fn for_count(count: usize) -> Self {
        if count > 0 {
            Self {
                text: count.to_string(),
                icon: Icon::CommentsFound,
            }
        } else {
            Self {
                text: String::new(),
                icon: Icon::NoneFound,
            }
        }
    }

    pub fn for_comments(comments: &[TaggedComment]) -> Self {
        Self::for_count(comments.len())
    }
}

#[derive(Debug, Default)]
pub struct Background {
    badges: Mutex<HashMap<TabId, Badge>>,
}

impl Background {
    pub fn badge(&self, tab: TabId) -> Option<Badge> {
        self.badges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&tab)
            .cloned()
    }

    fn set_badge(&self, tab: TabId, badge: Badge) {
        debug!(tab = tab.0, text = %badge.text, icon = badge.icon.path(), "updating badge");
        self.badges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(tab, badge);
    }
}

impl Handler for Background {
    async fn on_message(&self, message: Message, sender: Sender) -> Option<Vec<TaggedComment>> {
        match (message, sender.tab) {
            (Message::Set { comments }, Some(tab)) => {
                self.set_badge(tab, Badge::for_comments(&comments));
            }
            (Message::Set { .. }, None) => warn!("set without a sender tab, badge unchanged"),
            (Message::Get, _) => debug!("background ignores get"),
        }
        None
    }
}
