use std::cmp::Ordering;
use std::fmt;

const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Key under which spending is accumulated for one category.
///
/// Expenses logged without a category fall into the dedicated
/// [`CategoryKey::Uncategorized`] bucket, which stays distinct from a real
/// category that happens to be named "Uncategorized".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Named(String),
    Uncategorized,
}

impl CategoryKey {
    /// Builds the accumulation key for an expense record's category field.
    pub fn from_submitted(category: Option<&str>) -> Self {
        match category {
            Some(name) => Self::Named(name.to_string()),
            None => Self::Uncategorized,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Uncategorized => UNCATEGORIZED_LABEL,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Named(_) => 0,
            Self::Uncategorized => 1,
        }
    }
}

impl Ord for CategoryKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lexicographic by display name; the fallback bucket sorts after a
        // real category carrying the same label.
        self.name()
            .cmp(other.name())
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for CategoryKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalizes a category string for use as a budget key: surrounding
/// whitespace is trimmed, the first character is uppercased, and the rest is
/// lowercased. Expense records keep their category exactly as submitted;
/// only budget keys go through this.
pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_capitalizes() {
        assert_eq!(normalize_category("  food  "), "Food");
        assert_eq!(normalize_category("GROCERIES"), "Groceries");
        assert_eq!(normalize_category("food"), "Food");
        assert_eq!(normalize_category(""), "");
    }

    #[test]
    fn uncategorized_stays_distinct_from_named_twin() {
        let named = CategoryKey::Named("Uncategorized".into());
        assert_ne!(named, CategoryKey::Uncategorized);
        assert!(named < CategoryKey::Uncategorized);
    }

    #[test]
    fn keys_order_by_display_name() {
        let mut keys = vec![
            CategoryKey::Named("Transport".into()),
            CategoryKey::Uncategorized,
            CategoryKey::Named("Food".into()),
        ];
        keys.sort();
        assert_eq!(keys[0].name(), "Food");
        assert_eq!(keys[1].name(), "Transport");
        assert_eq!(keys[2].name(), "Uncategorized");
    }
}
