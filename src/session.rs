//! One page visit, end to end.
//!
//! Loads the page, lets the content context scan it after the settle delay
//! and report to the background context, then opens the popup. The CLI and
//! the MCP server both drive scans through here.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use reqwest::Url;
use tracing::info;

use crate::core::{PageSnapshot, ResourceFetcher, ScanOptions};
use crate::messaging::{
    Background, Badge, ContentScript, PopupView, TabId, listen, open_popup,
};

/// The only tab a session ever opens.
pub const SESSION_TAB: TabId = TabId(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub badge: Badge,
    pub view: PopupView,
}

pub async fn run_session<F: ResourceFetcher + 'static>(
    url: &Url,
    fetcher: F,
    options: ScanOptions,
    settle_delay: Duration,
) -> Result<Session> {
    info!(%url, "loading page");
    let html = fetcher
        .fetch(url.as_str())
        .await
        .with_context(|| format!("Failed to load page: {}", url))?;
    let page = PageSnapshot::parse(&html, Some(url));

    let background = Arc::new(Background::default());
    let background_endpoint = listen(Arc::clone(&background));

    let content = Arc::new(ContentScript::new(page, fetcher, options).with_settle_delay(settle_delay));
    let page_endpoint = listen(Arc::clone(&content));

    content
        .on_load(SESSION_TAB, &background_endpoint)
        .await
        .context("Failed to report comments to the background context")?;
    let badge = background
        .badge(SESSION_TAB)
        .unwrap_or_else(|| Badge::for_count(0));

    info!("opening popup");
    let view = open_popup(&page_endpoint).await;

    Ok(Session { badge, view })
}
