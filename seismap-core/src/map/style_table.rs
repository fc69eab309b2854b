use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// a style attribute keyed by magnitude bin label. insertion order is kept so the
/// request handed to the renderer lists bins the way the configuration does.
pub type StyleTable<V> = IndexMap<String, V>;

/// key differences between one style table and the labels derived from the
/// magnitude bins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTableMismatch {
    pub table: String,
    /// derived bin labels with no entry in the table
    pub missing: Vec<String>,
    /// table keys that match no derived bin label
    pub unexpected: Vec<String>,
}

impl std::fmt::Display for StyleTableMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let missing = self.missing.iter().map(|k| format!("'{k}'")).join(", ");
        let unexpected = self.unexpected.iter().map(|k| format!("'{k}'")).join(", ");
        write!(
            f,
            "{} keys do not match magnitude bin labels: missing [{}], unexpected [{}]",
            self.table, missing, unexpected
        )
    }
}

/// result of comparing every style table against the derived bin labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleKeyReport {
    pub expected: Vec<String>,
    pub mismatches: Vec<StyleTableMismatch>,
}

impl StyleKeyReport {
    pub fn new(expected: Vec<String>) -> StyleKeyReport {
        StyleKeyReport {
            expected,
            mismatches: vec![],
        }
    }

    /// compares the keys of a table against the expected labels, recording a
    /// mismatch if the key sets differ. ordering is ignored.
    pub fn compare<V>(&mut self, table_name: &str, table: &StyleTable<V>) {
        let missing = self
            .expected
            .iter()
            .filter(|label| !table.contains_key(label.as_str()))
            .cloned()
            .collect_vec();
        let unexpected = table
            .keys()
            .filter(|key| !self.expected.contains(*key))
            .cloned()
            .collect_vec();
        if !missing.is_empty() || !unexpected.is_empty() {
            self.mismatches.push(StyleTableMismatch {
                table: table_name.to_string(),
                missing,
                unexpected,
            });
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn mismatch_for(&self, table_name: &str) -> Option<&StyleTableMismatch> {
        self.mismatches.iter().find(|m| m.table == table_name)
    }
}

/// true for `#rgb` or `#rrggbb` color strings
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            (digits.len() == 3 || digits.len() == 6)
                && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["3.5-4.5", "4.5-5.0", "8.5-9.0"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_matching_keys_in_any_order() {
        let mut table: StyleTable<f64> = IndexMap::new();
        table.insert(String::from("8.5-9.0"), 24.0);
        table.insert(String::from("3.5-4.5"), 2.0);
        table.insert(String::from("4.5-5.0"), 2.0);
        let mut report = StyleKeyReport::new(labels());
        report.compare("dot_sizes", &table);
        assert!(report.is_consistent());
    }

    #[test]
    fn test_differently_formatted_label_is_reported_not_fixed() {
        let mut table: StyleTable<f64> = IndexMap::new();
        table.insert(String::from("3.5-4.5"), 18.0);
        table.insert(String::from("4.5-5.0"), 18.0);
        table.insert(String::from(">=8.5"), 54.0);
        let mut report = StyleKeyReport::new(labels());
        report.compare("beachball_sizes", &table);
        assert!(!report.is_consistent());
        let mismatch = report.mismatch_for("beachball_sizes").unwrap();
        assert_eq!(mismatch.missing, vec![String::from("8.5-9.0")]);
        assert_eq!(mismatch.unexpected, vec![String::from(">=8.5")]);
        assert!(table.contains_key(">=8.5"));
        assert_eq!(
            mismatch.to_string(),
            "beachball_sizes keys do not match magnitude bin labels: missing ['8.5-9.0'], unexpected ['>=8.5']"
        );
    }

    #[test]
    fn test_hex_colors() {
        assert!(is_hex_color("#fee391"));
        assert!(is_hex_color("#FFF"));
        assert!(!is_hex_color("fee391"));
        assert!(!is_hex_color("#fee39"));
        assert!(!is_hex_color("darkgreen"));
        assert!(!is_hex_color("#gggggg"));
    }
}
