use serde::{Deserialize, Serialize};

/// A single logged outflow. Immutable once created; the ledger only ever
/// appends these, never edits or deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Calendar date in `YYYY-MM-DD` form. Legacy records may carry a
    /// missing or truncated date; aggregation skips those rather than fail.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Expense {
    pub fn new(
        date: impl Into<String>,
        amount: f64,
        category: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            category,
            description,
        }
    }

    /// The `YYYY-MM` bucket this record belongs to, if its date carries one.
    pub fn month_key(&self) -> Option<&str> {
        month_key(&self.date)
    }
}

/// Extracts the leading `YYYY-MM` prefix of a date string. Returns `None`
/// when the string is shorter than seven bytes or the cut would split a
/// multi-byte character, so malformed records are excluded instead of
/// panicking.
pub fn month_key(date: &str) -> Option<&str> {
    date.get(..7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_takes_leading_prefix() {
        assert_eq!(month_key("2024-03-05"), Some("2024-03"));
        assert_eq!(month_key("2024-03"), Some("2024-03"));
    }

    #[test]
    fn month_key_rejects_short_or_missing_dates() {
        assert_eq!(month_key(""), None);
        assert_eq!(month_key("2024-3"), None);
        assert_eq!(month_key("\u{e9}\u{e9}\u{e9}\u{e9}"), None);
    }
}
