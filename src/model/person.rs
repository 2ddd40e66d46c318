use serde::{Deserialize, Serialize};

/// One selectable entry: a person that lives in either the candidate pool
/// or the chip list, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique numeric identifier, stable for the roster's lifetime
    pub id: u64,
    /// Display name; also the membership key for pool/chip moves
    pub name: String,
    /// Shown dimmed in the dropdown
    pub email: String,
    /// Avatar image URI. The terminal renders an initials badge instead;
    /// the field is kept for roster output and JSON round-tripping.
    pub avatar: String,
}

impl Person {
    pub fn new(id: u64, name: &str, email: &str, avatar: &str) -> Self {
        Person {
            id,
            name: name.to_string(),
            email: email.to_string(),
            avatar: avatar.to_string(),
        }
    }

    /// Up to two initials for the avatar badge: first letter of the first
    /// two whitespace-separated words, uppercased.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_two_words() {
        let p = Person::new(1, "Ada Lovelace", "ada@example.com", "x");
        assert_eq!(p.initials(), "AL");
    }

    #[test]
    fn test_initials_single_word() {
        let p = Person::new(1, "Cher", "cher@example.com", "x");
        assert_eq!(p.initials(), "C");
    }

    #[test]
    fn test_initials_three_words_takes_first_two() {
        let p = Person::new(1, "Mary Jane Watson", "mj@example.com", "x");
        assert_eq!(p.initials(), "MJ");
    }

    #[test]
    fn test_initials_lowercase_name() {
        let p = Person::new(1, "anna banks", "anna@example.com", "x");
        assert_eq!(p.initials(), "AB");
    }

    #[test]
    fn test_initials_empty_name() {
        let p = Person::new(1, "", "x@example.com", "x");
        assert_eq!(p.initials(), "");
    }
}
