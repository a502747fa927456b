//! Error handling
//!
//! Library code returns [`AppResult`]; the CLI edge wraps failures in
//! `anyhow::Error` and decides whether they are fatal.

pub mod context;
pub mod types;

pub use context::IoResultExt;
pub use types::{AppError, AppResult};
