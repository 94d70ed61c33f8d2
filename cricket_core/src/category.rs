//! # Attribute Categories
//!
//! Each attribute value belongs to one of five coarse bands:
//!
//! | category | canonical value | selectable values        |
//! |----------|-----------------|--------------------------|
//! | 低 low    | `1-3`           | 1, 2, 3, 1-2, 2-3, 1-3   |
//! | 中 medium | `4-6`           | 4, 5, 6, 4-5, 5-6, 4-6   |
//! | 高 high   | `7-9`           | 7, 8, 9, 7-8, 8-9, 7-9   |
//! | 超 super  | `10`            | 10                       |
//! | 神 god    | `11`            | 11                       |
//!
//! The functions here map a category to its canonical value, classify a
//! stored value back into a category, and decide which value gets saved.

/// Coarse attribute band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Low,
    Medium,
    High,
    Super,
    God,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Low,
        Category::Medium,
        Category::High,
        Category::Super,
        Category::God,
    ];

    /// Label shown in the category selector
    pub fn label(&self) -> &'static str {
        match self {
            Category::Low => "低",
            Category::Medium => "中",
            Category::High => "高",
            Category::Super => "超",
            Category::God => "神",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Canonical value stored when the user keeps the suggested default.
    pub fn default_value(&self) -> &'static str {
        match self {
            Category::Low => "1-3",
            Category::Medium => "4-6",
            Category::High => "7-9",
            Category::Super => "10",
            Category::God => "11",
        }
    }

    /// Values offered by the secondary selector once this category is chosen.
    pub fn value_options(&self) -> &'static [&'static str] {
        match self {
            Category::Low => &["1", "2", "3", "1-2", "2-3", "1-3"],
            Category::Medium => &["4", "5", "6", "4-5", "5-6", "4-6"],
            Category::High => &["7", "8", "9", "7-8", "8-9", "7-9"],
            Category::Super => &["10"],
            Category::God => &["11"],
        }
    }

    /// Band for a single integer value.
    pub fn from_number(value: i64) -> Option<Category> {
        match value {
            1..=3 => Some(Category::Low),
            4..=6 => Some(Category::Medium),
            7..=9 => Some(Category::High),
            10 => Some(Category::Super),
            11 => Some(Category::God),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether `value` is one of the five canonical default strings.
pub fn is_canonical_value(value: &str) -> bool {
    Category::ALL.iter().any(|c| c.default_value() == value)
}

/// Classify a stored value back into its category.
///
/// Integers are banded directly; a `lower-upper` range is banded by its lower
/// bound. Anything else has no category.
///
/// ```rust
/// use cricket_core::category::{classify_value, Category};
///
/// assert_eq!(classify_value("2"), Some(Category::Low));
/// assert_eq!(classify_value("4-6"), Some(Category::Medium));
/// assert_eq!(classify_value("strong"), None);
/// ```
pub fn classify_value(value: &str) -> Option<Category> {
    let value = value.trim();
    if let Ok(number) = value.parse::<i64>() {
        return Category::from_number(number);
    }

    let (lower, upper) = value.split_once('-')?;
    let lower: i64 = lower.trim().parse().ok()?;
    upper.trim().parse::<i64>().ok()?;
    Category::from_number(lower)
}

/// Value to persist for an attribute row.
///
/// A value that is not one of the canonical defaults is a custom override and
/// is kept verbatim. Otherwise the canonical default of the selected category
/// is used, which is empty when no category is selected.
pub fn resolve_value(category: Option<Category>, value: &str) -> String {
    if !is_canonical_value(value) {
        return value.to_string();
    }
    category
        .map(|c| c.default_value().to_string())
        .unwrap_or_default()
}
