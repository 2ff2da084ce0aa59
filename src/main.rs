// src/main.rs
// =============================================================================
// This is the entry point of the ghtree CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Pick the printer: terminal (ASCII) or file (Markdown)
// 4. Run fetch -> build -> print, cancellable with Ctrl-C
// 5. Exit with 0 on success, 1 on any error (usage errors included)
// =============================================================================

use anyhow::{Context, Result};
use clap::Parser;

use ghtree::app::{self, App};
use ghtree::cli::Cli;
use ghtree::github::{GitHubClient, RepoSpec};
use ghtree::logging;
use ghtree::render::{AsciiPrinter, MarkdownMeta, MarkdownPrinter};

#[tokio::main]
async fn main() {
    // clap exits with 2 on usage errors; this tool uses 1 for every error
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    logging::init_logging(cli.verbose)?;

    let target = RepoSpec::parse(&cli.repository)?;
    let client = GitHubClient::new(cli.token(), &cli.api_url, cli.timeout())
        .context("failed to set up GitHub client")?;

    match &cli.output {
        Some(path) => {
            let file = app::create_output_file(path)?;
            let meta = MarkdownMeta::new(target.html_url(), cli.branch.as_str());
            let mut application = App::new(client, MarkdownPrinter::new(file, meta));

            application
                .run(&target, &cli.branch, shutdown_signal())
                .await
                .with_context(|| format!("could not generate tree for {}", target))?;

            println!("Tree saved to {}", path.display());
        }
        None => {
            let mut application = App::new(client, AsciiPrinter::stdout());

            application
                .run(&target, &cli.branch, shutdown_signal())
                .await
                .with_context(|| format!("could not generate tree for {}", target))?;
        }
    }

    Ok(())
}

// Resolves on Ctrl-C
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available: never cancel
        std::future::pending::<()>().await;
    }
}
