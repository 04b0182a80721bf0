use crate::domain::entities::column::ColumnId;
use crate::domain::entities::sort::SortEntry;

/// Multi-column sort sequence; the first entry is the primary key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortStore {
    entries: Vec<SortEntry>,
}

impl SortStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, column: ColumnId) -> Option<SortEntry> {
        self.entries
            .iter()
            .find(|entry| entry.column == column)
            .copied()
    }

    /// Position of `column` in the sequence, 1-based for display.
    pub fn priority(&self, column: ColumnId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.column == column)
            .map(|idx| idx + 1)
    }

    pub fn toggle(&mut self, column: ColumnId) {
        match self.entries.iter_mut().find(|entry| entry.column == column) {
            Some(entry) => entry.desc = !entry.desc,
            None => self.entries.push(SortEntry::ascending(column)),
        }
    }

    pub fn remove(&mut self, column: ColumnId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.column != column);
        self.entries.len() != before
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.entries.is_empty();
        self.entries.clear();
        changed
    }

    /// Replaces the whole sequence, keeping the first entry for any column
    /// that appears more than once.
    pub fn replace(&mut self, entries: &[SortEntry]) -> bool {
        let mut next: Vec<SortEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if next.iter().all(|kept| kept.column != entry.column) {
                next.push(*entry);
            }
        }
        if next == self.entries {
            return false;
        }
        self.entries = next;
        true
    }
}
