use crate::model::person::Person;

/// The built-in roster, used when no `--roster` file is given.
/// Order matters: the dropdown preserves it.
pub fn builtin() -> Vec<Person> {
    vec![
        Person::new(1, "Anna Keller", "anna.keller@example.com", "https://i.pravatar.cc/150?img=1"),
        Person::new(2, "Bob Odenkirk", "bob.o@example.com", "https://i.pravatar.cc/150?img=2"),
        Person::new(3, "Hannah Park", "hannah.park@example.com", "https://i.pravatar.cc/150?img=3"),
        Person::new(4, "Diego Rivera", "diego.r@example.com", "https://i.pravatar.cc/150?img=4"),
        Person::new(5, "Elena Petrova", "elena.petrova@example.com", "https://i.pravatar.cc/150?img=5"),
        Person::new(6, "Farid Haddad", "farid.h@example.com", "https://i.pravatar.cc/150?img=6"),
        Person::new(7, "Grace Osei", "grace.osei@example.com", "https://i.pravatar.cc/150?img=7"),
        Person::new(8, "Hiro Tanaka", "hiro.tanaka@example.com", "https://i.pravatar.cc/150?img=8"),
        Person::new(9, "Ines Almeida", "ines.a@example.com", "https://i.pravatar.cc/150?img=9"),
        Person::new(10, "Jonas Berg", "jonas.berg@example.com", "https://i.pravatar.cc/150?img=10"),
        Person::new(11, "Katya Ivanova", "katya.i@example.com", "https://i.pravatar.cc/150?img=11"),
        Person::new(12, "Liam O'Connor", "liam.oc@example.com", "https://i.pravatar.cc/150?img=12"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_unique() {
        let roster = builtin();
        let ids: HashSet<u64> = roster.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), roster.len());
    }

    #[test]
    fn test_builtin_names_unique() {
        // Names are the membership key for pool/chip moves, so the
        // built-in roster must never carry duplicates.
        let roster = builtin();
        let names: HashSet<&str> = roster.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), roster.len());
    }

    #[test]
    fn test_builtin_non_empty() {
        assert!(!builtin().is_empty());
    }
}
