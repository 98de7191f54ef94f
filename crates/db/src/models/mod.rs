//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - A `Serialize` view that resolves bilingual columns for one locale

pub mod achievement;
pub mod experience;
pub mod interest;
pub mod media;
pub mod post;
pub mod rpg_stat;
pub mod site_settings;
pub mod skill;
pub mod user;
