use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary site directory with HTML pages and their resources.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    site_root: PathBuf,
}

impl McpTestFixture {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let site_root = temp_dir.path().canonicalize()?;

        Ok(Self {
            _temp_dir: temp_dir,
            site_root,
        })
    }

    /// Create a site from `(relative path, content)` pairs
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_files(&[
    ///     ("index.html", "<!-- hi -->"),
    ///     ("css/site.css", "/* Grid */"),
    /// ])?;
    /// ```
    pub fn with_files(files: &[(&str, &str)]) -> Result<Self> {
        let fixture = Self::new()?;
        for (path, content) in files {
            fixture.write_file(path, content)?;
        }
        Ok(fixture)
    }

    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.site_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Absolute path of a page, as an MCP `page` parameter
    pub fn page(&self, relative_path: &str) -> String {
        self.site_root.join(relative_path).to_string_lossy().to_string()
    }

    pub fn root_path(&self) -> &Path {
        &self.site_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// A page with comments in every kind plus one broken stylesheet link
pub fn fixture_sample_site() -> Result<McpTestFixture> {
    McpTestFixture::with_files(&[
        (
            "index.html",
            r#"<html>
<head>
  <!-- Hello world -->
  <link rel="stylesheet" href="css/site.css">
  <link rel="stylesheet" href="css/gone.css">
  <style>/* TODO: fix later */ h1 { margin: 0; }</style>
</head>
<body>
  <script>const x = 1; // increment counter</script>
  <script src="js/app.js"></script>
</body>
</html>"#,
        ),
        (
            "css/site.css",
            "/* Grid overrides */\n/* color: red; margin: 0; */\n",
        ),
        ("js/app.js", "// Wire up the menu\nmenu();\n"),
        ("clean.html", "<p>No comments here</p>"),
    ])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
