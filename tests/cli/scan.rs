use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_scan_sample_site() -> Result<()> {
    let test = CliTest::with_sample_site()?;

    let output = test.scan_command("index.html").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "badge: 5  /assets/images/comments_found.png\n\
         \n\
         HTML (1)\n\
         \x20 TODO: remove before launch  (Document)\n\
         \n\
         CSS (2)\n\
         \x20 Header tweaks   (Inline style #1)\n\
         \x20 Grid overrides  (site.css)\n\
         \n\
         JS (2)\n\
         \x20 increment counter  (Inline script #2)\n\
         \x20 Wire up the menu   (app.js)\n\
         \n\
         ✘ Found 5 comments in index.html\n"
    );

    Ok(())
}

#[test]
fn test_missing_stylesheet_is_logged_not_fatal() -> Result<()> {
    let test = CliTest::with_sample_site()?;

    let output = test.scan_command("index.html").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing.css"));
    assert!(stdout(&output).contains("(site.css)"));
    assert!(stdout(&output).contains("(app.js)"));

    Ok(())
}

#[test]
fn test_scan_clean_page() -> Result<()> {
    let test = CliTest::with_file(
        "clean.html",
        "<html><body><p>Nothing to see</p><style>p { margin: 0; }</style></body></html>",
    )?;

    let output = test.scan_command("clean.html").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "badge: (empty)  /assets/images/no_comments_found.png\n\
         ✓ No comments found in clean.html\n"
    );

    Ok(())
}

#[test]
fn test_scan_only_commented_out_code() -> Result<()> {
    let test = CliTest::with_file(
        "code.html",
        r#"<style>/* color: red; margin: 0; */</style>
<script>// document.getElementById("menu").hidden = true;</script>"#,
    )?;

    let output = test.scan_command("code.html").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No comments found"));

    Ok(())
}

#[test]
fn test_scan_selected_kinds() -> Result<()> {
    let test = CliTest::with_sample_site()?;

    let output = test
        .scan_command("index.html")
        .args(["--kind", "js"])
        .output()?;

    let out = stdout(&output);
    assert!(out.starts_with("badge: 2 "));
    assert!(out.contains("JS (2)"));
    assert!(!out.contains("HTML ("));
    assert!(!out.contains("CSS ("));

    Ok(())
}

#[test]
fn test_scan_no_external() -> Result<()> {
    let test = CliTest::with_sample_site()?;

    let output = test
        .scan_command("index.html")
        .arg("--no-external")
        .output()?;

    let out = stdout(&output);
    assert!(out.contains("Found 3 comments"));
    assert!(!out.contains("site.css"));
    assert!(!out.contains("app.js"));
    assert!(!stderr(&output).contains("missing.css"));

    Ok(())
}

#[test]
fn test_scan_json_output() -> Result<()> {
    let test = CliTest::with_sample_site()?;

    let output = test
        .scan_command("index.html")
        .args(["--format", "json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["page"], "index.html");
    assert_eq!(
        value["badge"],
        json!({"text": "5", "icon": "/assets/images/comments_found.png"})
    );
    assert_eq!(value["totalCount"], 5);
    assert_eq!(
        value["comments"][0],
        json!({"kind": "html", "text": "TODO: remove before launch", "origin": "Document"})
    );
    assert_eq!(
        value["comments"][4],
        json!({"kind": "js", "text": "Wire up the menu", "origin": "app.js"})
    );

    Ok(())
}

#[test]
fn test_scan_respects_config() -> Result<()> {
    let test = CliTest::with_sample_site()?;
    test.write_file(
        ".remarksrc.json",
        r#"{ "settleDelayMs": 0, "kinds": ["css"], "ignoreSources": ["site.css"] }"#,
    )?;

    let output = test.command().args(["scan", "index.html"]).output()?;

    let out = stdout(&output);
    assert!(out.contains("CSS (1)"));
    assert!(out.contains("Header tweaks"));
    assert!(!out.contains("Grid overrides"));

    Ok(())
}

#[test]
fn test_cli_kind_overrides_config() -> Result<()> {
    let test = CliTest::with_sample_site()?;
    test.write_file(".remarksrc.json", r#"{ "kinds": ["css"] }"#)?;

    let output = test
        .scan_command("index.html")
        .args(["--kind", "html"])
        .output()?;

    let out = stdout(&output);
    assert!(out.contains("HTML (1)"));
    assert!(!out.contains("CSS ("));

    Ok(())
}

#[test]
fn test_scan_file_url() -> Result<()> {
    let test = CliTest::with_sample_site()?;
    let url = format!("file://{}", test.root().join("index.html").display());

    let output = test.scan_command(&url).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("(site.css)"));

    Ok(())
}

#[test]
fn test_scan_missing_page_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command("nope.html").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Page not found: nope.html"));
    assert!(stdout(&output).is_empty());

    Ok(())
}

#[test]
fn test_scan_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_sample_site()?;
    test.write_file(".remarksrc.json", r#"{ "ignoreSources": ["[oops"] }"#)?;

    let output = test.scan_command("index.html").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignoreSources'"));

    Ok(())
}
