//! Category classifier
//!
//! Maps a category label to its 50/30/20 spending type through a constant
//! table. Labels outside the table classify as `Other`.

use crate::models::{ExpenseCategory, SpendingType};

/// Spending type → categories in that bucket
pub const CATEGORY_GROUPS: [(SpendingType, &[ExpenseCategory]); 3] = [
    (
        SpendingType::Needs,
        &[
            ExpenseCategory::FoodAndDrink,
            ExpenseCategory::Transportation,
            ExpenseCategory::Utilities,
            ExpenseCategory::Housing,
            ExpenseCategory::Health,
            ExpenseCategory::Education,
        ],
    ),
    (
        SpendingType::Wants,
        &[
            ExpenseCategory::Entertainment,
            ExpenseCategory::Shopping,
            ExpenseCategory::DiningOut,
            ExpenseCategory::Traveling,
            ExpenseCategory::Hobbies,
        ],
    ),
    (SpendingType::Other, &[ExpenseCategory::Miscellaneous]),
];

/// Spending type of a known category
pub fn spending_type_of(category: ExpenseCategory) -> SpendingType {
    CATEGORY_GROUPS
        .iter()
        .find(|(_, members)| members.contains(&category))
        .map(|(kind, _)| *kind)
        .unwrap_or(SpendingType::Other)
}

/// Classify a stored category label
pub fn classify(label: &str) -> SpendingType {
    ExpenseCategory::from_label(label)
        .map(spending_type_of)
        .unwrap_or(SpendingType::Other)
}

/// Categories belonging to a spending type, in table order
pub fn categories_of(kind: SpendingType) -> &'static [ExpenseCategory] {
    CATEGORY_GROUPS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, members)| *members)
        .unwrap_or(&[])
}
