use remarks::core::CommentKind;
use remarks::mcp::{RemarksMcpServer, types::ClassifyCommentParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::extract_tool_result_json;

async fn classify(kind: CommentKind, text: &str) -> serde_json::Value {
    let server = RemarksMcpServer::new();
    let result = server
        .classify_comment(Parameters(ClassifyCommentParams {
            kind,
            text: text.to_string(),
        }))
        .await
        .unwrap();
    extract_tool_result_json(&result)
}

// ============================================================================
// classify_comment tests
// ============================================================================

#[tokio::test]
async fn test_classify_commented_out_css() {
    let json_result = classify(CommentKind::Css, "color: red; margin: 0;").await;

    assert_eq!(
        json_result,
        json!({"verdict": "discard", "evidence": ["declaration", "declaration-sequence"]})
    );
}

#[tokio::test]
async fn test_classify_css_note_with_one_signal() {
    let json_result = classify(CommentKind::Css, "TODO: fix later").await;

    assert_eq!(
        json_result,
        json!({"verdict": "keep", "reason": "insufficientEvidence", "evidence": ["declaration"]})
    );
}

#[tokio::test]
async fn test_classify_js_prose_and_code() {
    let prose = classify(CommentKind::Js, "increment counter").await;
    assert_eq!(prose["verdict"], "keep");
    assert_eq!(prose["reason"], "naturalLanguage");

    let code = classify(CommentKind::Js, "<svg xmlns=\"http://www.w3.org/2000/svg\">").await;
    assert_eq!(code["verdict"], "discard");
    assert!(
        code["evidence"]
            .as_array()
            .unwrap()
            .contains(&json!("markup"))
    );
}

#[tokio::test]
async fn test_classify_short_text_is_kept() {
    let json_result = classify(CommentKind::Js, "x;").await;

    assert_eq!(json_result["verdict"], "keep");
    assert_eq!(json_result["reason"], "belowLengthFloor");
}

#[tokio::test]
async fn test_classify_html_is_always_kept() {
    let json_result = classify(CommentKind::Html, "<div class=\"x\"></div>").await;

    assert_eq!(json_result["verdict"], "keep");
    assert_eq!(json_result["evidence"], json!([]));
}
