//! Post categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::locale::Locale;

/// The fixed set of categories a post can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    PersonalProject,
    ProfessionalProject,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 2] = [Category::PersonalProject, Category::ProfessionalProject];

    /// Database / wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersonalProject => "PERSONAL_PROJECT",
            Self::ProfessionalProject => "PROFESSIONAL_PROJECT",
        }
    }

    pub fn label_en(self) -> &'static str {
        match self {
            Self::PersonalProject => "Personal Project",
            Self::ProfessionalProject => "Professional",
        }
    }

    pub fn label_pl(self) -> &'static str {
        match self {
            Self::PersonalProject => "Projekt Osobisty",
            Self::ProfessionalProject => "Profesjonalny",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        locale.pick(self.label_en(), self.label_pl())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Accepts the wire value case-insensitively (`personal_project` works too).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == upper)
            .ok_or_else(|| CoreError::Validation(format!("Unknown category: '{s}'")))
    }
}
