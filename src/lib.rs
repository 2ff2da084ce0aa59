// src/lib.rs
// =============================================================================
// ghtree: view a GitHub repository's directory tree without cloning it.
//
// Pipeline:
//   github (fetch flat listing) -> tree (build) -> render (print)
//
// app.rs wires the three together; main.rs only parses arguments and
// picks the output destination.
// =============================================================================

pub mod app;
pub mod cli;
pub mod error;
pub mod github;
pub mod logging;
pub mod render;
pub mod tree;

pub use app::App;
pub use error::{AppError, FetchError};
