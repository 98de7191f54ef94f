//! Folio domain logic.
//!
//! Pure functions and types shared by the database and API layers. Nothing in
//! this crate performs I/O.

pub mod category;
pub mod contact;
pub mod error;
pub mod locale;
pub mod media;
pub mod ordering;
pub mod rich_text;
pub mod slug;
pub mod theme;
pub mod types;
pub mod validation;
