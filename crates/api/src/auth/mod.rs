//! Authentication primitives.
//!
//! - [`jwt`] -- session-token generation and validation.
//! - [`cookie`] -- `Set-Cookie` construction and cookie lookup.
//! - [`oauth`] -- OAuth2 login against GitHub and Google.

pub mod cookie;
pub mod jwt;
pub mod oauth;
