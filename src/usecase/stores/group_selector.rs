use thiserror::Error;

use crate::domain::entities::column::ColumnId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("{} cannot be used for grouping", .0.label())]
    NotGroupable(ColumnId),
    #[error("select a column to group by")]
    NothingSelected,
}

/// At most one grouping column; selecting replaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupSelector {
    selected: Option<ColumnId>,
}

impl GroupSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<ColumnId> {
        self.selected
    }

    pub fn select(&mut self, column: ColumnId) -> Result<bool, GroupError> {
        if !column.descriptor().groupable {
            return Err(GroupError::NotGroupable(column));
        }
        let changed = self.selected != Some(column);
        self.selected = Some(column);
        Ok(changed)
    }

    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_replaces_the_previous_column() {
        let mut selector = GroupSelector::new();
        selector.select(ColumnId::Category).expect("category is groupable");
        selector
            .select(ColumnId::Subcategory)
            .expect("subcategory is groupable");
        assert_eq!(selector.selected(), Some(ColumnId::Subcategory));
    }

    #[test]
    fn non_groupable_column_is_rejected_and_selection_kept() {
        let mut selector = GroupSelector::new();
        selector.select(ColumnId::Category).expect("category is groupable");

        let err = selector
            .select(ColumnId::Price)
            .expect_err("price is not groupable");

        assert_eq!(err, GroupError::NotGroupable(ColumnId::Price));
        assert_eq!(err.to_string(), "Price cannot be used for grouping");
        assert_eq!(selector.selected(), Some(ColumnId::Category));
    }

    #[test]
    fn clear_empties_the_selection() {
        let mut selector = GroupSelector::new();
        assert!(!selector.clear());
        selector.select(ColumnId::Category).expect("category is groupable");
        assert!(selector.clear());
        assert_eq!(selector.selected(), None);
    }
}
