//! Outline inspection and Markdown export
//!
//! The generated text is never modified. [`OutlineCheck`] only reports how
//! well it follows the template, and [`MarkdownExport`] describes the
//! `outline.md` download.

use crate::core_types::provider::CompletionResult;
use crate::error::{OutlineError, OutlineResult};
use crate::logging::log_debug;
use crate::prompt::{PLACEHOLDER_MARKER, SECTION_HEADERS};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// File name offered for download
pub const OUTLINE_FILE_NAME: &str = "outline.md";

/// MIME type of the download
pub const OUTLINE_MIME_TYPE: &str = "text/markdown";

static HEADING: Lazy<Regex> =
    Lazy::new(|| {
        Regex::new(r"(?m)^[ \t]*(##[ \t]+\S.*?)[ \t\r]*$").expect("valid heading regex")
    });

/// Template conformance of a generated outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineCheck {
    /// Required headers that do not appear as a heading line
    pub missing_sections: Vec<&'static str>,
    /// Occurrences of the placeholder marker
    pub placeholder_count: usize,
}

impl OutlineCheck {
    pub fn inspect(text: &str) -> Self {
        let headings: Vec<&str> = HEADING
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();

        let missing_sections = SECTION_HEADERS
            .iter()
            .copied()
            .filter(|header| !headings.contains(header))
            .collect();

        let placeholder_count = text.matches(PLACEHOLDER_MARKER).count();

        let check = Self {
            missing_sections,
            placeholder_count,
        };

        log_debug!(
            heading_count = headings.len(),
            missing_sections = check.missing_sections.len(),
            placeholder_count = check.placeholder_count,
            "Inspected outline structure"
        );

        check
    }

    /// All six sections are present
    pub fn is_complete(&self) -> bool {
        self.missing_sections.is_empty()
    }
}

/// The `outline.md` download built from a completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownExport {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub body: String,
}

impl MarkdownExport {
    pub fn from_result(result: &CompletionResult) -> Self {
        Self {
            file_name: OUTLINE_FILE_NAME,
            mime_type: OUTLINE_MIME_TYPE,
            body: result.text.clone(),
        }
    }

    /// Write the body to `dir/outline.md`, replacing any previous export.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::ExportFailed`] if the file cannot be written.
    pub async fn write_to_dir(&self, dir: impl AsRef<Path>) -> OutlineResult<PathBuf> {
        let path = dir.as_ref().join(self.file_name);

        tokio::fs::write(&path, self.body.as_bytes())
            .await
            .map_err(|e| OutlineError::export_failed(&path, e))?;

        log_debug!(
            path = %path.display(),
            bytes = self.body.len(),
            "Outline exported"
        );

        Ok(path)
    }
}
