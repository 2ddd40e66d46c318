use crate::model::Person;
use crate::select::filter::matches_query;

/// How many consecutive empty-query backspaces commit a removal.
const BACKSPACE_COMMIT: u8 = 2;

/// The selection controller: owns the candidate pool, the chip list, the
/// query, dropdown visibility, the highlighted chip, and the double-backspace
/// counter. Pure in-memory state, independent of any rendering.
///
/// Every person from the initial roster is in exactly one of `pool` / `chips`
/// at all times; operations only move entries between the two, keyed by name.
///
/// Mutating operations are primary transitions. [`Picker::settle`] is the
/// second transition step: the caller runs it after each input event, before
/// the next draw, to commit a pending double-backspace removal and re-assert
/// the highlight invariant.
#[derive(Debug, Clone)]
pub struct Picker {
    pool: Vec<Person>,
    chips: Vec<Person>,
    query: String,
    dropdown_open: bool,
    highlighted: Option<usize>,
    backspace_count: u8,
}

impl Picker {
    pub fn new(roster: Vec<Person>) -> Self {
        Picker {
            pool: roster,
            chips: Vec::new(),
            query: String::new(),
            dropdown_open: false,
            highlighted: None,
            backspace_count: 0,
        }
    }

    pub fn pool(&self) -> &[Person] {
        &self.pool
    }

    pub fn chips(&self) -> &[Person] {
        &self.chips
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Index of the chip marked as the next deletion target, if any.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn backspace_count(&self) -> u8 {
        self.backspace_count
    }

    /// The dropdown shows when explicitly opened or while a query is typed.
    pub fn dropdown_visible(&self) -> bool {
        self.dropdown_open || !self.query.is_empty()
    }

    /// Candidates matching the query, in pool order. Recomputed per call;
    /// never stored.
    pub fn filtered(&self) -> Vec<&Person> {
        self.pool
            .iter()
            .filter(|p| matches_query(&p.name, &self.query))
            .collect()
    }

    /// Replace the query text. Any string is accepted. Note: this does not
    /// reset the backspace counter; only `settle` does, on commit.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Input focus/click.
    pub fn open_dropdown(&mut self) {
        self.dropdown_open = true;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Pointer-down outside both the entry region and the dropdown.
    pub fn click_outside(&mut self) {
        self.dropdown_open = false;
    }

    /// Mark a chip as the pending deletion target. Out-of-range is ignored.
    pub fn highlight(&mut self, index: usize) {
        if index < self.chips.len() {
            self.highlighted = Some(index);
        }
    }

    /// Move a person from the pool to the end of the chip list and clear the
    /// query. Rejects names not currently in the pool (returns false) so an
    /// entry can never appear in both lists.
    pub fn select(&mut self, name: &str) -> bool {
        let Some(pos) = self.pool.iter().position(|p| p.name == name) else {
            return false;
        };
        let person = self.pool.remove(pos);
        self.chips.push(person);
        self.query.clear();
        true
    }

    /// Remove a chip by name and append it back to the pool. Clears the
    /// highlight if it pointed at the removed chip, and shifts it down when
    /// it pointed past it, so it stays a valid index.
    pub fn remove_chip(&mut self, name: &str) -> bool {
        let Some(pos) = self.chips.iter().position(|p| p.name == name) else {
            return false;
        };
        let person = self.chips.remove(pos);
        self.pool.push(person);
        self.highlighted = match self.highlighted {
            Some(h) if h == pos => None,
            Some(h) if h > pos => Some(h - 1),
            other => other,
        };
        if self.chips.is_empty() {
            self.highlighted = None;
        }
        true
    }

    /// The empty-query backspace gesture. Only fires when the query is empty
    /// and at least one chip exists: highlights the last chip, bumps the
    /// counter, and closes the dropdown. The removal itself happens in
    /// [`Picker::settle`] once the counter reaches two.
    pub fn backspace(&mut self) {
        if !self.query.is_empty() || self.chips.is_empty() {
            return;
        }
        self.highlighted = Some(self.chips.len() - 1);
        self.backspace_count += 1;
        self.dropdown_open = false;
    }

    /// Second transition step, run after every primary transition and before
    /// the next draw: commits a double-backspace removal (last chip back to
    /// the pool, counter reset) and forces the highlight off when the chip
    /// list is empty.
    pub fn settle(&mut self) {
        if self.backspace_count >= BACKSPACE_COMMIT {
            if let Some(person) = self.chips.pop() {
                self.pool.push(person);
            }
            self.backspace_count = 0;
            self.highlighted = None;
        }
        if self.chips.is_empty() {
            self.highlighted = None;
        } else if let Some(h) = self.highlighted
            && h >= self.chips.len()
        {
            self.highlighted = Some(self.chips.len() - 1);
        }
    }
}
