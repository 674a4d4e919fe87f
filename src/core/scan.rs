//! Page-wide aggregation.
//!
//! HTML comments are collected first, then CSS, then JS. For each kind the
//! inline elements are processed in document order, then every external
//! resource is fetched concurrently and the results are appended once all
//! fetches have settled.

use futures::future::join_all;
use glob::Pattern;
use tracing::{debug, warn};

use crate::core::{
    data::{CommentKind, TaggedComment},
    extract::{extract_html, extract_text},
    fetch::{ResourceFetcher, origin_label},
    page::{PageSnapshot, ScriptElement},
};

/// Origin label for comment nodes of the document itself.
pub const DOCUMENT_ORIGIN: &str = "Document";

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub kinds: Vec<CommentKind>,
    pub fetch_external: bool,
    /// External resources whose URL or label matches are not fetched.
    pub ignore_sources: Vec<Pattern>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            kinds: CommentKind::ALL.to_vec(),
            fetch_external: true,
            ignore_sources: Vec::new(),
        }
    }
}

impl ScanOptions {
    pub fn includes(&self, kind: CommentKind) -> bool {
        self.kinds.contains(&kind)
    }

    fn is_ignored(&self, url: &str, label: &str) -> bool {
        self.ignore_sources
            .iter()
            .any(|pattern| pattern.matches(url) || pattern.matches(label))
    }
}

/// `"Inline style #2"`, `"Inline script #1"`.
pub fn inline_label(kind: CommentKind, index: usize) -> String {
    format!("Inline {} #{}", kind.element_noun(), index)
}

/// Collect every surviving comment on the page.
///
/// Never fails. A resource that cannot be fetched contributes nothing and
/// is logged.
pub async fn scan_page<F: ResourceFetcher>(
    page: &PageSnapshot,
    fetcher: &F,
    options: &ScanOptions,
) -> Vec<TaggedComment> {
    let mut comments = Vec::new();

    if options.includes(CommentKind::Html) {
        comments.extend(extract_html(
            page.comments.iter().map(String::as_str),
            DOCUMENT_ORIGIN,
        ));
    }

    if options.includes(CommentKind::Css) {
        for (index, style) in page.styles.iter().enumerate() {
            let label = inline_label(CommentKind::Css, index + 1);
            comments.extend(extract_text(CommentKind::Css, style, &label));
        }
        let urls = page.stylesheets.iter().map(String::as_str);
        comments.extend(fetch_all(CommentKind::Css, urls, fetcher, options).await);
    }

    if options.includes(CommentKind::Js) {
        // Indices count every script element, external ones included.
        for (index, script) in page.scripts.iter().enumerate() {
            if let ScriptElement::Inline { text } = script
                && !text.trim().is_empty()
            {
                let label = inline_label(CommentKind::Js, index + 1);
                comments.extend(extract_text(CommentKind::Js, text, &label));
            }
        }
        let urls = page.scripts.iter().filter_map(|script| match script {
            ScriptElement::External { src } => Some(src.as_str()),
            ScriptElement::Inline { .. } => None,
        });
        comments.extend(fetch_all(CommentKind::Js, urls, fetcher, options).await);
    }

    debug!(count = comments.len(), "page scan finished");
    comments
}

async fn fetch_all<'a, F: ResourceFetcher>(
    kind: CommentKind,
    urls: impl Iterator<Item = &'a str>,
    fetcher: &F,
    options: &ScanOptions,
) -> Vec<TaggedComment> {
    if !options.fetch_external {
        return Vec::new();
    }

    let fetches = urls
        .map(|url| (url, origin_label(url)))
        .filter(|(url, label)| {
            let ignored = options.is_ignored(url, label);
            if ignored {
                debug!(%url, "skipping ignored source");
            }
            !ignored
        })
        .map(|(url, label)| fetch_one(kind, url, label, fetcher));

    join_all(fetches).await.into_iter().flatten().collect()
}

async fn fetch_one<F: ResourceFetcher>(
    kind: CommentKind,
    url: &str,
    label: String,
    fetcher: &F,
) -> Vec<TaggedComment> {
    match fetcher.fetch(url).await {
        Ok(text) => {
            let comments = extract_text(kind, &text, &label);
            debug!(%url, count = comments.len(), "extracted {} comments", kind);
            comments
        }
        Err(error) => {
            warn!(%url, %error, "cannot access {}", kind.resource_noun());
            Vec::new()
        }
    }
}
