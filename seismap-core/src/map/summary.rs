use super::MapResult;

/// the three-line report printed after a map is built
pub struct MapSummary<'a>(pub &'a MapResult);

impl std::fmt::Display for MapSummary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "✔ Map  → {}", self.0.html)?;
        writeln!(f, "✔ Data → {}", self.0.csv)?;
        write!(f, "✔ Events: {}", group_thousands(self.0.event_count))
    }
}

/// formats a count with a comma between each group of three digits
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(52310), "52,310");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_summary_echoes_result() {
        let result = MapResult {
            html: String::from("/maps/Longonjo TSF.html"),
            csv: String::from("/maps/data/events.csv"),
            event_count: 18204,
        };
        let expected = "✔ Map  → /maps/Longonjo TSF.html\n✔ Data → /maps/data/events.csv\n✔ Events: 18,204";
        assert_eq!(MapSummary(&result).to_string(), expected);
    }
}
