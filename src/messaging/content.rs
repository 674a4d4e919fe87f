//! Page-side context: scans the page once it settles and answers `get`.

use std::time::Duration;

use tracing::{debug, info};

use crate::core::{PageSnapshot, ResourceFetcher, ScanOptions, TaggedComment, scan_page};
use crate::messaging::{Endpoint, Handler, Message, MessagingError, Sender, TabId};

/// Time the page gets to finish loading late resources before the first scan.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

pub struct ContentScript<F> {
    page: PageSnapshot,
    fetcher: F,
    options: ScanOptions,
    settle_delay: Duration,
}

impl<F: ResourceFetcher> ContentScript<F> {
    pub fn new(page: PageSnapshot, fetcher: F, options: ScanOptions) -> Self {
        Self {
            page,
            fetcher,
            options,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    /// Run a fresh scan of the page.
    pub async fn scan(&self) -> Vec<TaggedComment> {
        scan_page(&self.page, &self.fetcher, &self.options).await
    }

    /// Wait for the page to settle, scan it, and report to the background.
    ///
    /// Returns the number of comments reported.
    pub async fn on_load(&self, tab: TabId, background: &Endpoint) -> Result<usize, MessagingError> {
        tokio::time::sleep(self.settle_delay).await;

        let comments = self.scan().await;
        let count = comments.len();
        info!(tab = tab.0, count, "reporting comments to background");

        background
            .send(&Message::Set { comments }, Sender::tab(tab))
            .await?;
        Ok(count)
    }
}

impl<F: ResourceFetcher + 'static> Handler for ContentScript<F> {
    /// `get` always triggers a new scan, so the reply reflects the page as
    /// it is now.
    async fn on_message(&self, message: Message, _sender: Sender) -> Option<Vec<TaggedComment>> {
        match message {
            Message::Get => Some(self.scan().await),
            Message::Set { .. } => {
                debug!("page context ignores set");
                None
            }
        }
    }
}
