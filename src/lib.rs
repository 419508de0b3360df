//! Spotify Playlist Exporter Library
//!
//! This library authorizes against the Spotify Web API with the OAuth 2.0
//! authorization code flow, keeps the resulting token pair on disk, and
//! exports the tracks of a playlist into a CSV file.
//!
//! # Modules
//!
//! - `api` - HTTP handler for the local OAuth callback
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration file loading and endpoint composition
//! - `error` - Error types
//! - `export` - CSV serialization of tracks
//! - `management` - Token store
//! - `server` - Local HTTP listener for the OAuth callback
//! - `session` - Refresh-then-export pipeline
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Playlist URL parsing and prompt helpers
//!
//! # Example
//!
//! ```
//! use spexport::{config, config::Config, session::Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), spexport::error::Error> {
//!     let path = config::config_path();
//!     let config = Config::load(&path).await?;
//!     let session = Session::start(config, &config::tokens_path(&path)).await?;
//!     session
//!         .export_playlist("https://open.spotify.com/playlist/XYZ123", "out.csv".as_ref())
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod management;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints a progress or status line prefixed with a blue `o`.
///
/// ```
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a completion line prefixed with a green check mark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and exits with status 1.
///
/// Only for fatal errors in the CLI layer; code after it never runs, so it
/// can stand in for a value in a `match` arm:
///
/// ```
/// let config = match Config::load(&path).await {
///     Ok(config) => config,
///     Err(e) => error!("{}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a non-fatal problem prefixed with a yellow `!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
