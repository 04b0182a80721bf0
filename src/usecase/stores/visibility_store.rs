use std::collections::BTreeMap;

use crate::domain::entities::column::ColumnId;

pub type VisibilityMap = BTreeMap<ColumnId, bool>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityStore {
    visible: VisibilityMap,
}

impl Default for VisibilityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityStore {
    pub fn new() -> Self {
        Self {
            visible: ColumnId::ALL.iter().map(|column| (*column, true)).collect(),
        }
    }

    pub fn get(&self, column: ColumnId) -> bool {
        self.visible.get(&column).copied().unwrap_or(true)
    }

    pub fn map(&self) -> &VisibilityMap {
        &self.visible
    }

    pub fn visible_columns(&self) -> Vec<ColumnId> {
        ColumnId::ALL
            .into_iter()
            .filter(|column| self.get(*column))
            .collect()
    }

    pub fn toggle(&mut self, column: ColumnId) {
        let next = !self.get(column);
        self.visible.insert(column, next);
    }

    pub fn show_all(&mut self) -> bool {
        let changed = self.visible.values().any(|visible| !*visible);
        for visible in self.visible.values_mut() {
            *visible = true;
        }
        changed
    }

    /// Merges a pending map over the committed one. Columns the pending map
    /// leaves out keep their committed value, so the map never loses a column.
    pub fn apply(&mut self, pending: &VisibilityMap) -> bool {
        let merged = normalize_visibility(pending, &self.visible);
        if merged == self.visible {
            return false;
        }
        self.visible = merged;
        true
    }
}

pub fn normalize_visibility(pending: &VisibilityMap, fallback: &VisibilityMap) -> VisibilityMap {
    ColumnId::ALL
        .iter()
        .map(|column| {
            let visible = pending
                .get(column)
                .or_else(|| fallback.get(column))
                .copied()
                .unwrap_or(true);
            (*column, visible)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_every_column_visible() {
        let store = VisibilityStore::new();
        assert_eq!(store.map().len(), ColumnId::ALL.len());
        assert_eq!(store.visible_columns(), ColumnId::ALL.to_vec());
    }

    #[test]
    fn show_all_turns_every_column_back_on() {
        let mut store = VisibilityStore::new();
        store.toggle(ColumnId::Price);
        store.toggle(ColumnId::Name);
        assert!(!store.get(ColumnId::Price));

        assert!(store.show_all());

        for column in ColumnId::ALL {
            assert!(store.get(column), "{column} should be visible");
        }
    }

    #[test]
    fn partial_apply_keeps_omitted_columns() {
        let mut store = VisibilityStore::new();
        store.toggle(ColumnId::SalePrice);

        let mut pending = VisibilityMap::new();
        pending.insert(ColumnId::Id, false);

        assert!(store.apply(&pending));

        assert_eq!(store.map().len(), ColumnId::ALL.len());
        assert!(!store.get(ColumnId::Id));
        assert!(!store.get(ColumnId::SalePrice));
        assert!(store.get(ColumnId::Name));
    }

    #[test]
    fn applying_the_committed_map_is_a_no_op() {
        let mut store = VisibilityStore::new();
        let committed = store.map().clone();
        assert!(!store.apply(&committed));
    }
}
