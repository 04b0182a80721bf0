use crate::domain::entities::column::ColumnId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortEntry {
    pub column: ColumnId,
    pub desc: bool,
}

impl SortEntry {
    pub fn ascending(column: ColumnId) -> Self {
        Self {
            column,
            desc: false,
        }
    }

    pub fn arrow(&self) -> &'static str {
        if self.desc {
            "↓"
        } else {
            "↑"
        }
    }
}
