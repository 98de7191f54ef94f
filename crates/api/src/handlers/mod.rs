//! Request handlers, one submodule per resource.
//!
//! Public handlers read published content localized through [`Lang`]. Admin
//! handlers take [`RequireAdmin`] first and delegate to the repositories in
//! `folio_db`, mapping failures through [`AppError`].
//!
//! [`Lang`]: crate::middleware::locale::Lang
//! [`RequireAdmin`]: crate::middleware::rbac::RequireAdmin
//! [`AppError`]: crate::error::AppError

pub mod achievements;
pub mod auth;
pub mod categories;
pub mod contact;
pub mod experiences;
pub mod interests;
pub mod media;
pub mod ordering;
pub mod posts;
pub mod rpg_stats;
pub mod settings;
pub mod skill_categories;
pub mod soft_skills;
pub mod themes;
