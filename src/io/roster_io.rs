use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Person;

/// Error type for roster loading
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse roster: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("roster is empty")]
    Empty,
    #[error("duplicate id {0} in roster")]
    DuplicateId(u64),
    #[error("duplicate name {0:?} in roster")]
    DuplicateName(String),
}

/// Load a roster from a JSON file: an array of `{id, name, email, avatar}`
/// records. Ids and names must be unique; names are the membership key for
/// pool/chip moves, so a duplicate would let one entry shadow another.
pub fn load_roster(path: &Path) -> Result<Vec<Person>, RosterError> {
    let text = fs::read_to_string(path).map_err(|e| RosterError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let roster: Vec<Person> = serde_json::from_str(&text)?;
    validate_roster(&roster)?;
    Ok(roster)
}

fn validate_roster(roster: &[Person]) -> Result<(), RosterError> {
    if roster.is_empty() {
        return Err(RosterError::Empty);
    }
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for person in roster {
        if !ids.insert(person.id) {
            return Err(RosterError::DuplicateId(person.id));
        }
        if !names.insert(person.name.as_str()) {
            return Err(RosterError::DuplicateName(person.name.clone()));
        }
    }
    Ok(())
}
