// src/render/printer.rs
// =============================================================================
// Printers own an output destination and know which Style to use.
//
// - AsciiPrinter: plain tree, normally to stdout
// - MarkdownPrinter: Markdown document, normally to a newly created file
//
// Both delegate to render(), so the traversal is written once.
// =============================================================================

use std::io::{self, Write};

use super::{render, MarkdownMeta, Style};
use crate::tree::Tree;

// Something that can print a finished tree
pub trait Printer {
    fn print(&mut self, tree: &Tree<'_>) -> io::Result<()>;
}

/// Plain box-drawing output
pub struct AsciiPrinter<W: Write> {
    writer: W,
}

impl AsciiPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AsciiPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Printer for AsciiPrinter<W> {
    fn print(&mut self, tree: &Tree<'_>) -> io::Result<()> {
        render(tree, &mut self.writer, &Style::Plain)?;
        self.writer.flush()
    }
}

/// Markdown document output
pub struct MarkdownPrinter<W: Write> {
    writer: W,
    meta: MarkdownMeta,
}

impl<W: Write> MarkdownPrinter<W> {
    pub fn new(writer: W, meta: MarkdownMeta) -> Self {
        Self { writer, meta }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Printer for MarkdownPrinter<W> {
    fn print(&mut self, tree: &Tree<'_>) -> io::Result<()> {
        let style = Style::Markdown(self.meta.clone());
        render(tree, &mut self.writer, &style)?;
        self.writer.flush()
    }
}
