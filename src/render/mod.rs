// src/render/mod.rs
// =============================================================================
// This module turns a Tree into text.
//
// Two output styles share one traversal (walk.rs):
// - Plain: the bare box-drawing tree, for the terminal
// - Markdown: a small header (repo link, branch, timestamp) followed by the
//   same tree inside a fenced code block, for saving to a file
//
// Submodules:
// - walk: sorting + depth-first traversal
// - markdown: the front matter around the tree
// - printer: the Printer trait and its terminal/file implementations
// =============================================================================

mod markdown;
mod printer;
mod walk;

use std::io::{self, Write};

use crate::tree::Tree;

pub use markdown::MarkdownMeta;
pub use printer::{AsciiPrinter, MarkdownPrinter, Printer};
pub use walk::{sorted_children, walk};

/// How the tree is written out
#[derive(Debug, Clone)]
pub enum Style {
    Plain,
    Markdown(MarkdownMeta),
}

// Writes the tree to `sink` in the given style
//
// Any write error aborts the render and is returned as-is.
pub fn render<W: Write + ?Sized>(tree: &Tree<'_>, sink: &mut W, style: &Style) -> io::Result<()> {
    match style {
        Style::Plain => write_lines(tree, sink),
        Style::Markdown(meta) => {
            markdown::write_header(sink, &tree.root().name, meta)?;
            writeln!(sink, "```")?;
            write_lines(tree, sink)?;
            writeln!(sink, "```")
        }
    }
}

fn write_lines<W: Write + ?Sized>(tree: &Tree<'_>, sink: &mut W) -> io::Result<()> {
    walk(tree, |line| writeln!(sink, "{}", line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{Entry, EntryKind};
    use crate::tree::build;

    fn plain(tree: &Tree) -> String {
        let mut out = Vec::new();
        render(tree, &mut out, &Style::Plain).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_nested_directory() {
        let entries = vec![
            Entry::new("a/b.txt", EntryKind::File),
            Entry::new("a", EntryKind::Directory),
        ];
        let tree = build(&entries, "repo");
        assert_eq!(plain(&tree), "repo\n└── a/\n    └── b.txt\n");
    }

    #[test]
    fn test_plain_directory_sorts_before_file() {
        let entries = vec![
            Entry::new("src/main.go", EntryKind::File),
            Entry::new("README.md", EntryKind::File),
        ];
        let tree = build(&entries, "repo");
        assert_eq!(
            plain(&tree),
            "repo\n├── src/\n│   └── main.go\n└── README.md\n"
        );
    }

    #[test]
    fn test_plain_empty_tree_is_one_line() {
        let tree = build(&[], "repo");
        assert_eq!(plain(&tree), "repo\n");
    }

    // A sink that accepts a fixed number of bytes, then fails
    struct FailingSink {
        remaining: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            let n = buf.len().min(self.remaining);
            self.remaining -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let entries = vec![Entry::new("a.txt", EntryKind::File)];
        let tree = build(&entries, "repo");
        let mut sink = FailingSink { remaining: 5 };

        let err = render(&tree, &mut sink, &Style::Plain).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
