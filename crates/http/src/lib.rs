//! Wicket HTTP client.
//!
//! Wraps the backend API behind a small reqwest client and implements the
//! [`wicket_core::CredentialsApi`] seam so the auth store never sees HTTP
//! details.

pub mod client;
pub mod types;

pub use client::{WicketClient, WicketClientBuilder, error::ClientError};
pub use types::{LoginRequest, TokenResponse};
