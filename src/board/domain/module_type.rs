//! Department workflow tags for tasks.

use super::ParseModuleTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Department workflow a task belongs to.
///
/// Wire tags are the backend's SCREAMING_SNAKE forms. Decoding is lenient
/// (unknown tags normalize to [`ModuleType::Other`]); the strict parser is
/// for form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModuleType {
    /// Lead intake and follow-up.
    Lead,
    /// Direct client meetings and visits.
    ClientInteraction,
    /// Campaigns and promotion.
    Marketing,
    /// Agreements, verification, registration.
    Legal,
    /// Internal administration.
    Admin,
    /// Post-sale support and maintenance.
    AfterSales,
    /// Automation-generated work.
    Smart,
    /// Anything unclassified.
    Other,
    /// Rental workflows.
    Rent,
}

impl ModuleType {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "LEAD",
            Self::ClientInteraction => "CLIENT_INTERACTION",
            Self::Marketing => "MARKETING",
            Self::Legal => "LEGAL",
            Self::Admin => "ADMIN",
            Self::AfterSales => "AFTER_SALES",
            Self::Smart => "SMART",
            Self::Other => "OTHER",
            Self::Rent => "RENT",
        }
    }
}

impl Default for ModuleType {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ModuleType {
    type Error = ParseModuleTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "LEAD" => Ok(Self::Lead),
            "CLIENT_INTERACTION" => Ok(Self::ClientInteraction),
            "MARKETING" => Ok(Self::Marketing),
            "LEGAL" => Ok(Self::Legal),
            "ADMIN" => Ok(Self::Admin),
            "AFTER_SALES" => Ok(Self::AfterSales),
            "SMART" => Ok(Self::Smart),
            "OTHER" => Ok(Self::Other),
            "RENT" => Ok(Self::Rent),
            _ => Err(ParseModuleTypeError(value.to_owned())),
        }
    }
}

impl From<String> for ModuleType {
    fn from(value: String) -> Self {
        Self::try_from(value.as_str()).unwrap_or_default()
    }
}

impl From<ModuleType> for String {
    fn from(value: ModuleType) -> Self {
        value.as_str().to_owned()
    }
}
