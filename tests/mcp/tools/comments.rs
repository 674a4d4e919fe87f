use remarks::core::CommentKind;
use remarks::mcp::{RemarksMcpServer, types::GetCommentsParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{extract_tool_result_json, fixture_sample_site};

fn params(page: String, kinds: Option<Vec<CommentKind>>) -> Parameters<GetCommentsParams> {
    Parameters(GetCommentsParams {
        page,
        kinds,
        settle_delay_ms: Some(0),
    })
}

// ============================================================================
// get_comments tests
// ============================================================================

#[tokio::test]
async fn test_get_comments_sample_site() {
    let fixture = fixture_sample_site().unwrap();
    let server = RemarksMcpServer::new();

    let result = server
        .get_comments(params(fixture.page("index.html"), None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result,
        json!({
            "badge": {"text": "5", "icon": "/assets/images/comments_found.png"},
            "totalCount": 5,
            "comments": [
                {"kind": "html", "text": "Hello world", "origin": "Document"},
                {"kind": "css", "text": "TODO: fix later", "origin": "Inline style #1"},
                {"kind": "css", "text": "Grid overrides", "origin": "site.css"},
                {"kind": "js", "text": "increment counter", "origin": "Inline script #1"},
                {"kind": "js", "text": "Wire up the menu", "origin": "app.js"}
            ]
        })
    );
}

#[tokio::test]
async fn test_get_comments_filters_kinds() {
    let fixture = fixture_sample_site().unwrap();
    let server = RemarksMcpServer::new();

    let result = server
        .get_comments(params(fixture.page("index.html"), Some(vec![CommentKind::Css])))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    assert!(
        json_result["comments"]
            .as_array()
            .unwrap()
            .iter()
            .all(|c| c["kind"] == "css")
    );
}

#[tokio::test]
async fn test_get_comments_clean_page() {
    let fixture = fixture_sample_site().unwrap();
    let server = RemarksMcpServer::new();

    let result = server
        .get_comments(params(fixture.page("clean.html"), None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result["badge"],
        json!({"text": "", "icon": "/assets/images/no_comments_found.png"})
    );
    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["comments"], json!([]));
}

#[tokio::test]
async fn test_get_comments_missing_page() {
    let fixture = fixture_sample_site().unwrap();
    let server = RemarksMcpServer::new();

    let result = server
        .get_comments(params(fixture.page("absent.html"), None))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_get_comments_rejects_empty_kinds() {
    let fixture = fixture_sample_site().unwrap();
    let server = RemarksMcpServer::new();

    let result = server
        .get_comments(params(fixture.page("index.html"), Some(Vec::new())))
        .await;

    assert!(result.is_err());
}
