use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, SAMPLE_CSS, SAMPLE_JS, SAMPLE_PAGE};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .remarksrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".remarksrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["settleDelayMs"], 500);
    assert_eq!(parsed["fetchExternal"], true);
    assert_eq!(parsed["kinds"], serde_json::json!(["html", "css", "js"]));
    assert!(parsed["ignoreSources"].as_array().is_some());
    assert!(content.contains("  "), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".remarksrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .remarksrc.json already exists
    ");

    assert_eq!(test.read_file(".remarksrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("index.html", SAMPLE_PAGE)?;
    test.write_file("css/site.css", SAMPLE_CSS)?;
    test.write_file("js/app.js", SAMPLE_JS)?;

    let output = test.scan_command("index.html").output()?;
    assert_eq!(
        output.status.code(),
        Some(1),
        "Scan should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
