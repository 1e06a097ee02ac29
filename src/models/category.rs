//! Expense categories and spending types
//!
//! Categories are a fixed set. Each one belongs to exactly one spending type
//! of the 50/30/20 rule; the mapping itself lives in
//! [`crate::analysis::classifier`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three spending buckets of the 50/30/20 rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendingType {
    Needs,
    Wants,
    Other,
}

impl fmt::Display for SpendingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Needs => write!(f, "Needs"),
            Self::Wants => write!(f, "Wants"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Known expense categories
///
/// Expenses store the category label as a string so that records written
/// with a label outside this set still load and analyze (as `Other`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    FoodAndDrink,
    Transportation,
    Utilities,
    Housing,
    Health,
    Education,
    Entertainment,
    Shopping,
    DiningOut,
    Traveling,
    Hobbies,
    Miscellaneous,
}

impl ExpenseCategory {
    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::FoodAndDrink,
            Self::Transportation,
            Self::Utilities,
            Self::Housing,
            Self::Health,
            Self::Education,
            Self::Entertainment,
            Self::Shopping,
            Self::DiningOut,
            Self::Traveling,
            Self::Hobbies,
            Self::Miscellaneous,
        ]
    }

    /// The stored label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Self::FoodAndDrink => "Makanan & Minuman",
            Self::Transportation => "Transportasi",
            Self::Utilities => "Tagihan (Listrik, Air, Internet)",
            Self::Housing => "Sewa/Cicilan Rumah",
            Self::Health => "Kesehatan",
            Self::Education => "Pendidikan",
            Self::Entertainment => "Hiburan",
            Self::Shopping => "Belanja (Fashion, Gadget)",
            Self::DiningOut => "Makan di Luar (Restaurant)",
            Self::Traveling => "Traveling",
            Self::Hobbies => "Hobi",
            Self::Miscellaneous => "Lainnya",
        }
    }

    /// Short ASCII key accepted on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::FoodAndDrink => "food",
            Self::Transportation => "transport",
            Self::Utilities => "bills",
            Self::Housing => "housing",
            Self::Health => "health",
            Self::Education => "education",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::DiningOut => "restaurant",
            Self::Traveling => "travel",
            Self::Hobbies => "hobby",
            Self::Miscellaneous => "other",
        }
    }

    /// Exact label lookup
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    /// Lenient lookup: exact label, case-insensitive label, or short key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(category) = Self::from_label(s) {
            return Ok(category);
        }

        let lower = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label().to_lowercase() == lower || c.key() == lower)
            .ok_or_else(|| format!("Unknown category: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_unique() {
        let mut labels: Vec<_> = ExpenseCategory::all().iter().map(|c| c.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), ExpenseCategory::all().len());
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(ExpenseCategory::from_label("Hiburan"), Some(ExpenseCategory::Entertainment));
        assert_eq!(ExpenseCategory::from_label("hiburan"), None);
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!("hiburan".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Entertainment));
        assert_eq!("restaurant".parse::<ExpenseCategory>(), Ok(ExpenseCategory::DiningOut));
        assert_eq!(
            "Sewa/Cicilan Rumah".parse::<ExpenseCategory>(),
            Ok(ExpenseCategory::Housing)
        );
        assert!("Groceries".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_spending_type_display() {
        assert_eq!(SpendingType::Needs.to_string(), "Needs");
        assert_eq!(SpendingType::Other.to_string(), "Other");
    }
}
