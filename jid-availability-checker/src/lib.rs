//! # jid-availability-checker
//!
//! Abstraction over the account API's username existence check, used by the
//! JID availability validator to ask whether a `username@domain` pair is
//! still free.
//!
//! ## Endpoint Contract
//!
//! The account API accepts a form-encoded POST of `{username, domain}` and
//! answers with a bare status code:
//!
//! | Status | Meaning |
//! |--------|---------|
//! | 2xx | The JID does not exist — available |
//! | 409 | The JID is already registered — taken |
//! | other | Unexpected (treated as a transport fault) |
//!
//! The endpoint URL comes from host configuration (page metadata or
//! deployment settings), never from this crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jid_availability_checker::{
//!     CheckRequest, ExistenceChecker, HttpCheckerConfig, HttpExistenceChecker,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HttpCheckerConfig::new("https://example.com/api/check-user".parse()?);
//!     let checker = HttpExistenceChecker::new(config)?;
//!
//!     let request = CheckRequest::new("bob", "example.com");
//!     match checker.check(&request).await {
//!         Ok(()) => println!("{} is available", request.jid()),
//!         Err(e) if e.is_expected() => println!("{} is taken", request.jid()),
//!         Err(e) => eprintln!("check failed: {e}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All checker operations return [`Result<T, CheckerError>`](CheckerError).
//! `CheckerError::JidExists` is the *expected* business outcome for HTTP 409;
//! [`CheckerError::is_expected`] separates it from transport faults for log
//! classification.

mod error;
mod http;
mod traits;
mod types;

// Re-export error types
pub use error::{CheckerError, Result};

// Re-export the checker abstraction and the HTTP implementation
pub use http::HttpExistenceChecker;
pub use traits::ExistenceChecker;

// Re-export request/config types
pub use types::{CheckRequest, HttpCheckerConfig};
