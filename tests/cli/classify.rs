use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_classify_css_declarations() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["classify", "css", "color: red; margin: 0;"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ discard  CSS (looks like code)
      evidence: declaration, declaration-sequence

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_classify_css_note() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["classify", "css", "TODO: fix later"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("✓ keep  CSS"));

    Ok(())
}

#[test]
fn test_classify_js_prose() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["classify", "js", "increment counter"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "✓ keep  JS (plain words)\n");

    Ok(())
}

#[test]
fn test_classify_js_code() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["classify", "js", "console.log(value);"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("code-syntax"));

    Ok(())
}

#[test]
fn test_classify_html_is_always_kept() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["classify", "html", "<div class=\"x\"></div>"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}
