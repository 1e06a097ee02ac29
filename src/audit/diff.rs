//! Change summaries for audit entries
//!
//! Compares two serialized snapshots field by field at the top level.

use serde::Serialize;
use serde_json::Value;

/// Fields that change on every write and carry no information
const BOOKKEEPING_FIELDS: &[&str] = &["created_at", "updated_at"];

/// Summarize what changed between two snapshots of the same entity
///
/// Returns `None` when nothing but bookkeeping timestamps differ.
pub fn summarize_changes<T: Serialize>(before: &T, after: &T) -> Option<String> {
    let before = serde_json::to_value(before).ok()?;
    let after = serde_json::to_value(after).ok()?;
    generate_diff(&before, &after)
}

/// Describe top-level differences between two JSON values
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                if BOOKKEEPING_FIELDS.contains(&key.as_str()) {
                    continue;
                }
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) && !BOOKKEEPING_FIELDS.contains(&key.as_str()) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            changes
        }
        _ if before != after => vec![format!("{} -> {}", format_value(before), format_value(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) if s.chars().count() > 40 => {
            let head: String = s.chars().take(37).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HouseholdStatus, Money, UserProfile};
    use serde_json::json;

    #[test]
    fn test_profile_income_change() {
        let before = UserProfile::new("Rina", Money::from_units(6_000_000));
        let mut after = before.clone();
        after.monthly_income = Money::from_units(7_500_000);
        after.status = HouseholdStatus::Married;
        after.updated_at = chrono::Utc::now() + chrono::Duration::seconds(5);

        let diff = summarize_changes(&before, &after).unwrap();
        assert!(diff.contains("monthly_income: 600000000 -> 750000000"));
        assert!(diff.contains(r#"status: "Single" -> "Married""#));
        assert!(!diff.contains("updated_at"));
    }

    #[test]
    fn test_only_timestamps_changed() {
        let before = UserProfile::new("Rina", Money::from_units(6_000_000));
        let mut after = before.clone();
        after.updated_at = chrono::Utc::now() + chrono::Duration::seconds(5);

        assert_eq!(summarize_changes(&before, &after), None);
    }

    #[test]
    fn test_added_and_removed_fields() {
        let diff = generate_diff(&json!({"a": 1}), &json!({"b": true})).unwrap();
        assert!(diff.contains("a: 1 -> (removed)"));
        assert!(diff.contains("b: (added) -> true"));
    }

    #[test]
    fn test_long_strings_truncated() {
        let long = "x".repeat(60);
        let diff = generate_diff(&json!({"note": ""}), &json!({"note": long})).unwrap();
        assert!(diff.ends_with("...\""));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(generate_diff(&json!(1), &json!(2)), Some("1 -> 2".into()));
        assert_eq!(generate_diff(&json!("x"), &json!("x")), None);
    }
}
