//! # API Module
//!
//! HTTP endpoints of the local listener used during authorization.
//!
//! - [`callback`] - receives the redirect from Spotify's authorization page,
//!   exchanges the `code` for a token pair and stores it
//!
//! The handler reads its configuration, HTTP client and token file location
//! from a [`CallbackState`] value handed to the router, so it can be driven
//! directly in tests through [`handle_code`].

mod callback;

pub use callback::AuthOutcome;
pub use callback::CallbackState;
pub use callback::callback;
pub use callback::handle_code;
