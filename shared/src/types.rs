//! Common types used across the platform

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Consumable categories tracked by the system
///
/// The wire and storage representation is lowercase, matching the database
/// CHECK constraint; `Display` renders the capitalized label used in CSV
/// output and trend group names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Sealant,
    Paint,
    Oil,
    Grease,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Sealant => "Sealant",
            ItemCategory::Paint => "Paint",
            ItemCategory::Oil => "Oil",
            ItemCategory::Grease => "Grease",
        }
    }

    /// All categories, in display order
    pub fn all() -> [ItemCategory; 4] {
        [
            ItemCategory::Sealant,
            ItemCategory::Paint,
            ItemCategory::Oil,
            ItemCategory::Grease,
        ]
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sealant" => Ok(ItemCategory::Sealant),
            "paint" => Ok(ItemCategory::Paint),
            "oil" => Ok(ItemCategory::Oil),
            "grease" => Ok(ItemCategory::Grease),
            _ => Err("unknown item category"),
        }
    }
}

/// Derived stock level status for an inventory item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Normal,
    Low,
    Critical,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Normal => "normal",
            StockStatus::Low => "low",
            StockStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived expiry status for an inventory item with an expiry date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    Expired,
    Critical,
    Warning,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Critical => "critical",
            ExpiryStatus::Warning => "warning",
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User roles recognized by the platform
///
/// Identity and sessions come from the external identity provider; the role
/// claim gates report access on the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Staff,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Staff => "staff",
        }
    }

    /// Whether this role may generate and export reports
    pub fn can_view_reports(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Manager)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "manager" => Ok(UserRole::Manager),
            "staff" => Ok(UserRole::Staff),
            _ => Err("unknown user role"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for cat in ItemCategory::all() {
            assert_eq!(cat.as_str().parse::<ItemCategory>().unwrap(), cat);
        }
    }

    #[test]
    fn category_serde_matches_storage_convention() {
        for cat in ItemCategory::all() {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str().to_ascii_lowercase()));
            let parsed: ItemCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, cat);
        }
        assert!(serde_json::from_str::<ItemCategory>("\"Sealant\"").is_err());
    }

    #[test]
    fn report_roles() {
        assert!(UserRole::Admin.can_view_reports());
        assert!(UserRole::Manager.can_view_reports());
        assert!(!UserRole::Staff.can_view_reports());
    }
}
