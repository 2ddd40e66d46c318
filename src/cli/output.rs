use crate::model::Person;
use crate::util::unicode;

/// Format the roster listing: one aligned line per person, or a JSON array
/// with `--json`.
pub fn format_roster(roster: &[Person], json: bool) -> String {
    if json {
        // Roster came from serde, so serialization cannot fail
        return serde_json::to_string_pretty(roster).unwrap_or_default();
    }

    let name_col = roster
        .iter()
        .map(|p| unicode::display_width(&p.name))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for person in roster {
        let pad = name_col - unicode::display_width(&person.name);
        out.push_str(&format!(
            "{:>3}  {}{}  {}\n",
            person.id,
            person.name,
            " ".repeat(pad),
            person.email
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Person> {
        vec![
            Person::new(1, "Anna", "anna@example.com", "a"),
            Person::new(2, "Bob Odenkirk", "bob@example.com", "b"),
        ]
    }

    #[test]
    fn test_text_output_aligns_emails() {
        let out = format_roster(&sample(), false);
        assert_eq!(
            out,
            "  1  Anna          anna@example.com\n  2  Bob Odenkirk  bob@example.com\n"
        );
    }

    #[test]
    fn test_json_output_round_trips() {
        let out = format_roster(&sample(), true);
        let parsed: Vec<Person> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_empty_roster() {
        assert_eq!(format_roster(&[], false), "");
    }
}
