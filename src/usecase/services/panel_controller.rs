use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::entities::column::ColumnId;
use crate::domain::entities::filter::{validate_filter_value, FilterError, FilterValue};
use crate::usecase::services::grid_state::GridState;
use crate::usecase::stores::group_selector::GroupError;
use crate::usecase::stores::sort_store::SortStore;
use crate::usecase::stores::visibility_store::VisibilityMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Visibility,
    Sort,
    Filter,
    Group,
}

impl PanelKind {
    pub const ALL: [PanelKind; 4] = [
        PanelKind::Visibility,
        PanelKind::Sort,
        PanelKind::Filter,
        PanelKind::Group,
    ];

    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Visibility => "Show/Hide",
            Self::Sort => "Sort",
            Self::Filter => "Filtering",
            Self::Group => "Create Groups",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Visibility => "Show/Hide Columns",
            Self::Sort => "Sorting Options",
            Self::Filter => "Filters",
            Self::Group => "Create Groups",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("no panel is open")]
    NothingOpen,
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Group(#[from] GroupError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityDraft {
    pub visible: VisibilityMap,
}

impl VisibilityDraft {
    pub fn toggle(&mut self, column: ColumnId) {
        let entry = self.visible.entry(column).or_insert(true);
        *entry = !*entry;
    }

    pub fn show_all(&mut self) {
        for column in ColumnId::ALL {
            self.visible.insert(column, true);
        }
    }

    pub fn is_visible(&self, column: ColumnId) -> bool {
        self.visible.get(&column).copied().unwrap_or(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDraft {
    pub sorting: SortStore,
}

impl SortDraft {
    pub fn toggle(&mut self, column: ColumnId) {
        self.sorting.toggle(column);
    }

    pub fn remove(&mut self, column: ColumnId) {
        self.sorting.remove(column);
    }
}

/// Filter edits in progress. `seeded` holds the store values at the time the
/// draft was taken; only columns that differ from it are committed.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDraft {
    values: BTreeMap<ColumnId, FilterValue>,
    seeded: BTreeMap<ColumnId, FilterValue>,
    defaults: BTreeMap<ColumnId, FilterValue>,
}

impl FilterDraft {
    fn from_grid(grid: &GridState) -> Self {
        let entries = grid.filters().entries();
        let (values, defaults): (BTreeMap<_, _>, BTreeMap<_, _>) = entries
            .map(|entry| {
                (
                    (entry.column, entry.value.clone()),
                    (entry.column, entry.default.clone()),
                )
            })
            .unzip();
        Self {
            seeded: values.clone(),
            values,
            defaults,
        }
    }

    pub fn value(&self, column: ColumnId) -> Option<&FilterValue> {
        self.values.get(&column)
    }

    /// Same kind rules as the store: a mismatched value is refused.
    pub fn set(&mut self, column: ColumnId, value: FilterValue) -> Result<(), FilterError> {
        let expected = self.defaults.get(&column).map(FilterValue::kind);
        validate_filter_value(column, expected, &value)?;
        self.values.insert(column, value);
        Ok(())
    }

    pub fn reset_one(&mut self, column: ColumnId) {
        if let Some(default) = self.defaults.get(&column) {
            self.values.insert(column, default.clone());
        }
    }

    fn is_edited(&self, column: ColumnId, value: &FilterValue) -> bool {
        self.seeded.get(&column) != Some(value)
    }

    fn pending(&self) -> Vec<(ColumnId, FilterValue)> {
        self.values
            .iter()
            .filter(|(column, value)| self.is_edited(**column, value))
            .map(|(column, value)| (*column, value.clone()))
            .collect()
    }

    /// Takes fresh values and defaults from the grid, keeping the user's
    /// edited columns on top.
    fn rebase(&mut self, grid: &GridState) {
        let mut fresh = Self::from_grid(grid);
        for (column, value) in self.pending() {
            if fresh.set(column, value).is_err() {
                debug!(%column, "dropped filter edit after reload");
            }
        }
        *self = fresh;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDraft {
    pub choice: Option<ColumnId>,
    pub error: Option<GroupError>,
}

impl GroupDraft {
    pub fn choose(&mut self, column: Option<ColumnId>) {
        self.choice = column;
        self.error = None;
    }
}

/// Which side panel is showing, with the panel's uncommitted edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Panel {
    #[default]
    Closed,
    ShowingVisibility(VisibilityDraft),
    ShowingSort(SortDraft),
    ShowingFilter(FilterDraft),
    ShowingGroup(GroupDraft),
}

impl Panel {
    pub fn kind(&self) -> Option<PanelKind> {
        match self {
            Panel::Closed => None,
            Panel::ShowingVisibility(_) => Some(PanelKind::Visibility),
            Panel::ShowingSort(_) => Some(PanelKind::Sort),
            Panel::ShowingFilter(_) => Some(PanelKind::Filter),
            Panel::ShowingGroup(_) => Some(PanelKind::Group),
        }
    }

    fn seeded(kind: PanelKind, grid: &GridState) -> Self {
        match kind {
            PanelKind::Visibility => Panel::ShowingVisibility(VisibilityDraft {
                visible: grid.visibility().map().clone(),
            }),
            PanelKind::Sort => Panel::ShowingSort(SortDraft {
                sorting: grid.sorting().clone(),
            }),
            PanelKind::Filter => Panel::ShowingFilter(FilterDraft::from_grid(grid)),
            PanelKind::Group => Panel::ShowingGroup(GroupDraft {
                choice: grid.grouping().selected(),
                error: None,
            }),
        }
    }
}

/// Keeps at most one panel open. Apply is the only path from a draft into
/// the grid; switching or closing panels drops the draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelController {
    panel: Panel,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn kind(&self) -> Option<PanelKind> {
        self.panel.kind()
    }

    pub fn open(&mut self, kind: PanelKind, grid: &GridState) {
        self.panel = Panel::seeded(kind, grid);
    }

    pub fn close(&mut self) {
        self.panel = Panel::Closed;
    }

    /// Brings an open filter draft in line with a reloaded grid. Other panels
    /// do not depend on the dataset and are left alone.
    pub fn refresh(&mut self, grid: &GridState) {
        if let Panel::ShowingFilter(draft) = &mut self.panel {
            draft.rebase(grid);
        }
    }

    pub fn visibility_draft(&mut self) -> Option<&mut VisibilityDraft> {
        match &mut self.panel {
            Panel::ShowingVisibility(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn sort_draft(&mut self) -> Option<&mut SortDraft> {
        match &mut self.panel {
            Panel::ShowingSort(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn filter_draft(&mut self) -> Option<&mut FilterDraft> {
        match &mut self.panel {
            Panel::ShowingFilter(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn group_draft(&mut self) -> Option<&mut GroupDraft> {
        match &mut self.panel {
            Panel::ShowingGroup(draft) => Some(draft),
            _ => None,
        }
    }

    /// Commits the open panel's draft in one step and closes the panel. On a
    /// validation failure nothing is written and the panel stays open.
    pub fn apply(&mut self, grid: &mut GridState) -> Result<(), PanelError> {
        match &mut self.panel {
            Panel::Closed => return Err(PanelError::NothingOpen),
            Panel::ShowingVisibility(draft) => {
                grid.apply_visibility(&draft.visible);
            }
            Panel::ShowingSort(draft) => {
                grid.replace_sort(draft.sorting.entries());
            }
            Panel::ShowingFilter(draft) => {
                grid.commit_filters(&draft.pending())?;
            }
            Panel::ShowingGroup(draft) => {
                let result = match draft.choice {
                    Some(column) => grid.select_group(column),
                    None => Err(GroupError::NothingSelected),
                };
                if let Err(err) = result {
                    draft.error = Some(err.clone());
                    return Err(err.into());
                }
            }
        }
        info!(panel = ?self.kind(), "applied panel");
        self.close();
        Ok(())
    }

    /// The panel's clear button: clears the committed state right away and
    /// reseeds the draft. The visibility panel has no clear, only "show all"
    /// on its draft.
    pub fn clear(&mut self, grid: &mut GridState) -> Result<(), PanelError> {
        let kind = self.kind().ok_or(PanelError::NothingOpen)?;
        match kind {
            PanelKind::Visibility => {
                if let Some(draft) = self.visibility_draft() {
                    draft.show_all();
                }
                return Ok(());
            }
            PanelKind::Sort => {
                grid.clear_sort();
            }
            PanelKind::Filter => {
                grid.reset_filters();
            }
            PanelKind::Group => {
                grid.clear_group();
            }
        }
        info!(panel = ?kind, "cleared panel state");
        self.panel = Panel::seeded(kind, grid);
        Ok(())
    }
}
