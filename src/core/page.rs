//! Explicit document snapshot.
//!
//! Everything the scanner needs from the DOM is captured up front as owned
//! data, so scanning never touches a live document and tests can build a
//! snapshot by hand.

use std::sync::LazyLock;

use reqwest::Url;
use scraper::{Html, Node, Selector};

static STYLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("style").unwrap());
static STYLESHEET_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"link[rel~="stylesheet"]"#).unwrap());
static SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("script").unwrap());

/// A `<script>` element: either a reference to an external file or inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptElement {
    External { src: String },
    Inline { text: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Raw values of comment nodes, in document order.
    pub comments: Vec<String>,
    /// Text content of each `<style>` element.
    pub styles: Vec<String>,
    /// Resolved `href` of each stylesheet link.
    pub stylesheets: Vec<String>,
    /// Every `<script>` element, external ones included.
    pub scripts: Vec<ScriptElement>,
}

impl PageSnapshot {
    /// Parse a page and capture its comments, styles and scripts.
    ///
    /// `base` resolves relative `href` and `src` values. Without it, or when
    /// a value does not resolve, the raw attribute is kept.
    pub fn parse(html: &str, base: Option<&Url>) -> Self {
        let document = Html::parse_document(html);

        let comments = document
            .tree
            .root()
            .descendants()
            .filter_map(|node| match node.value() {
                Node::Comment(comment) => Some(String::from(&**comment)),
                _ => None,
            })
            .collect();

        let styles = document
            .select(&STYLE_SELECTOR)
            .map(|element| element.text().collect::<String>())
            .collect();

        let stylesheets = document
            .select(&STYLESHEET_SELECTOR)
            .filter_map(|element| element.value().attr("href"))
            .filter(|href| !href.trim().is_empty())
            .map(|href| resolve(base, href))
            .collect();

        let scripts = document
            .select(&SCRIPT_SELECTOR)
            .map(|element| match element.value().attr("src") {
                Some(src) if !src.trim().is_empty() => ScriptElement::External {
                    src: resolve(base, src),
                },
                _ => ScriptElement::Inline {
                    text: element.text().collect(),
                },
            })
            .collect();

        Self {
            comments,
            styles,
            stylesheets,
            scripts,
        }
    }
}

fn resolve(base: Option<&Url>, reference: &str) -> String {
    let reference = reference.trim();
    base.and_then(|base| base.join(reference).ok())
        .map(String::from)
        .unwrap_or_else(|| reference.to_string())
}
