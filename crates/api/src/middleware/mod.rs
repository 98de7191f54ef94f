//! Request extractors shared by the handlers.
//!
//! - [`auth::AuthUser`] -- the session user from a Bearer token or the `auth_token` cookie.
//! - [`rbac::RequireAdmin`] -- requires an admin session.
//! - [`locale::Lang`] -- content language from `Accept-Language`.
//! - [`json::AppJson`] -- `Json` whose rejections use the error envelope.

pub mod auth;
pub mod json;
pub mod locale;
pub mod rbac;
