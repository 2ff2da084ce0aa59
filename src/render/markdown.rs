// src/render/markdown.rs
// =============================================================================
// Front matter written above the tree in Markdown mode:
//
//   # tools
//
//   **Repository**: [https://github.com/rei0721/tools](https://github.com/rei0721/tools)
//   **Branch**: `main`
//   **Generated**: 2024-05-01 09:30:00
//
//   ---
//
// Two trailing spaces on the first lines are Markdown hard line breaks.
// =============================================================================

use chrono::{Local, NaiveDateTime};
use std::io::{self, Write};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Repository details shown in the Markdown header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownMeta {
    /// Browser URL of the repository
    pub repo_url: String,
    /// Branch, tag or SHA the tree was read from
    pub ref_name: String,
    /// Local time the document was generated
    pub generated_at: NaiveDateTime,
}

impl MarkdownMeta {
    // Stamps the metadata with the current local time
    pub fn new(repo_url: impl Into<String>, ref_name: impl Into<String>) -> Self {
        Self::at(repo_url, ref_name, Local::now().naive_local())
    }

    pub fn at(
        repo_url: impl Into<String>,
        ref_name: impl Into<String>,
        generated_at: NaiveDateTime,
    ) -> Self {
        MarkdownMeta {
            repo_url: repo_url.into(),
            ref_name: ref_name.into(),
            generated_at,
        }
    }
}

pub(super) fn write_header<W: Write + ?Sized>(
    sink: &mut W,
    title: &str,
    meta: &MarkdownMeta,
) -> io::Result<()> {
    writeln!(sink, "# {}", title)?;
    writeln!(sink)?;
    writeln!(sink, "**Repository**: [{0}]({0})  ", meta.repo_url)?;
    writeln!(sink, "**Branch**: `{}`  ", meta.ref_name)?;
    writeln!(
        sink,
        "**Generated**: {}",
        meta.generated_at.format(TIMESTAMP_FORMAT)
    )?;
    writeln!(sink)?;
    writeln!(sink, "---")
}
