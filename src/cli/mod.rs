//! # CLI Module
//!
//! User-facing commands. Each one loads the configuration, drives the
//! library and reports progress through the crate's console macros; any
//! failure ends the process via [`error!`](crate::error!).
//!
//! - [`auth`] - one-time authorization; stores the token pair
//! - [`extract`] - refreshes the access token, prompts for an output file and
//!   a playlist URL, and writes the playlist's tracks as CSV
//!
//! ```bash
//! spexport auth       # once, opens the browser
//! spexport extract    # every export
//! ```

mod auth;
mod extract;

pub use auth::auth;
pub use extract::extract;
