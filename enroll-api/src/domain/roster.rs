use directory::Supervisor;

/// Normalize the raw upstream records into the roster served to clients:
/// drop numeric jurisdictions, sort ascending by jurisdiction, last name,
/// first name (case-insensitive), and format each record for display.
pub fn sorted_display_roster(records: Vec<Supervisor>) -> Vec<String> {
    let mut roster: Vec<Supervisor> = records
        .into_iter()
        .filter(|record| !has_numeric_jurisdiction(record))
        .collect();

    roster.sort_by_cached_key(|record| {
        (
            record.jurisdiction.to_lowercase(),
            record.last_name.to_lowercase(),
            record.first_name.to_lowercase(),
        )
    });

    roster.iter().map(Supervisor::display_name).collect()
}

// Numeric jurisdictions are upstream placeholder codes, not category
// labels. The upstream convention counts anything number-coercible as
// numeric, including empty and whitespace-only values.
fn has_numeric_jurisdiction(record: &Supervisor) -> bool {
    let jurisdiction = record.jurisdiction.trim();
    jurisdiction.is_empty() || jurisdiction.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supervisor(jurisdiction: &str, last_name: &str, first_name: &str) -> Supervisor {
        Supervisor {
            jurisdiction: jurisdiction.to_string(),
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
        }
    }

    #[test]
    fn drops_numeric_jurisdictions_and_sorts() {
        let records = vec![
            supervisor("5", "Numeric", "Code"),
            supervisor("B", "Smith", "A"),
            supervisor("A", "Jones", "Z"),
        ];

        assert_eq!(
            sorted_display_roster(records),
            vec!["A - Jones, Z", "B - Smith, A"]
        );
    }

    #[test]
    fn drops_float_empty_and_whitespace_jurisdictions() {
        let records = vec![
            supervisor("12.5", "Float", "Code"),
            supervisor("", "Empty", "Code"),
            supervisor("   ", "Blank", "Code"),
            supervisor("C", "Kept", "One"),
        ];

        assert_eq!(sorted_display_roster(records), vec!["C - Kept, One"]);
    }

    #[test]
    fn sorts_case_insensitively() {
        let records = vec![
            supervisor("b", "smith", "a"),
            supervisor("A", "Jones", "Z"),
            supervisor("B", "Adams", "Q"),
        ];

        assert_eq!(
            sorted_display_roster(records),
            vec!["A - Jones, Z", "B - Adams, Q", "b - smith, a"]
        );
    }

    #[test]
    fn breaks_ties_by_last_then_first_name() {
        let records = vec![
            supervisor("A", "Zimmer", "Ann"),
            supervisor("A", "Adams", "Ben"),
            supervisor("A", "Adams", "Amy"),
        ];

        assert_eq!(
            sorted_display_roster(records),
            vec!["A - Adams, Amy", "A - Adams, Ben", "A - Zimmer, Ann"]
        );
    }

    #[test]
    fn empty_input_yields_empty_roster() {
        assert!(sorted_display_roster(Vec::new()).is_empty());
    }
}
