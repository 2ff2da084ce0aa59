// src/app.rs
// =============================================================================
// Core flow of the tool:
//
// 1. Fetch the flat listing (can be cancelled by the shutdown future)
// 2. Warn on the diagnostic stream if GitHub truncated the listing
// 3. Build the tree
// 4. Print it
//
// App is generic over the Fetcher and the Printer, so tests run the whole
// flow with a stub fetcher and an in-memory printer.
// =============================================================================

use std::fs::File;
use std::future::Future;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::AppError;
use crate::github::{Fetcher, RepoSpec};
use crate::render::Printer;
use crate::tree::{self, TreeStats};

const TRUNCATED_WARNING: &str =
    "Warning: the repository is too large and GitHub truncated the listing; the tree below is incomplete";

pub struct App<F, P, D = io::Stderr> {
    fetcher: F,
    printer: P,
    diagnostics: D,
}

impl<F: Fetcher, P: Printer> App<F, P> {
    // Warnings go to stderr
    pub fn new(fetcher: F, printer: P) -> Self {
        App {
            fetcher,
            printer,
            diagnostics: io::stderr(),
        }
    }
}

impl<F: Fetcher, P: Printer, D: Write> App<F, P, D> {
    pub fn with_diagnostics<D2: Write>(self, diagnostics: D2) -> App<F, P, D2> {
        App {
            fetcher: self.fetcher,
            printer: self.printer,
            diagnostics,
        }
    }

    // Runs fetch -> build -> print for one repository
    //
    // If `shutdown` completes before the fetch does, nothing is built or
    // printed and AppError::Cancelled is returned.
    //
    // Returns the directory/file counts of the printed tree.
    pub async fn run<S>(
        &mut self,
        target: &RepoSpec,
        reference: &str,
        shutdown: S,
    ) -> Result<TreeStats, AppError>
    where
        S: Future<Output = ()>,
    {
        info!(repo = %target, reference, "fetching repository tree");

        let response = tokio::select! {
            result = self.fetcher.get_tree(&target.owner, &target.repo, reference) => result?,
            _ = shutdown => {
                info!("fetch cancelled");
                return Err(AppError::Cancelled);
            }
        };

        if response.truncated {
            writeln!(self.diagnostics, "{}", TRUNCATED_WARNING)
                .and_then(|_| self.diagnostics.flush())
                .map_err(|e| AppError::io("failed to write truncation warning", e))?;
        }

        let tree = tree::build(&response.tree, &target.repo);
        debug!(nodes = tree.len(), "rendering tree");

        self.printer
            .print(&tree)
            .map_err(|e| AppError::io("failed to write directory tree", e))?;

        Ok(tree.stats())
    }
}

// Creates (or truncates) the Markdown output file
pub fn create_output_file(path: &Path) -> Result<BufWriter<File>, AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::io(format!("cannot create output file {}", path.display()), e)
    })?;
    Ok(BufWriter::new(file))
}
