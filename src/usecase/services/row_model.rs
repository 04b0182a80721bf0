use std::collections::BTreeSet;

use chrono::NaiveDate;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::domain::entities::column::ColumnId;
use crate::domain::entities::filter::NumericRange;
use crate::domain::entities::record::{CellValue, RowRecord};
use crate::domain::entities::sort::SortEntry;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterPredicate {
    Fuzzy(String),
    OneOf(BTreeSet<String>),
    Between(NumericRange),
    DateBetween(NaiveDate, NaiveDate),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilter {
    pub column: ColumnId,
    pub predicate: FilterPredicate,
}

/// Everything the row model needs to turn the loaded rows into what the grid
/// shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableConfig {
    pub column_order: Vec<ColumnId>,
    pub sorting: Vec<SortEntry>,
    pub grouping: Option<ColumnId>,
    pub column_filters: Vec<ColumnFilter>,
    pub global_filter: String,
    pub pagination: Pagination,
    pub expanded: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevelRow {
    Leaf(usize),
    Group { key: String, members: Vec<usize> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    Leaf { index: usize, nested: bool },
    Group { key: String, count: usize, expanded: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowModel {
    filtered: Vec<usize>,
    top_level: Vec<TopLevelRow>,
    page_rows: Vec<DisplayRow>,
    page_index: usize,
    page_count: usize,
}

impl RowModel {
    pub fn build(rows: &[RowRecord], config: &TableConfig) -> Self {
        let matcher = SkimMatcherV2::default().ignore_case();
        let global = config.global_filter.trim();

        let mut filtered: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                config
                    .column_filters
                    .iter()
                    .all(|filter| filter.predicate.matches(row.value(filter.column), &matcher))
            })
            .filter(|(_, row)| global.is_empty() || matches_global(row, global, &matcher))
            .map(|(idx, _)| idx)
            .collect();

        if !config.sorting.is_empty() {
            // Stable sort keeps load order between equal keys.
            filtered.sort_by(|a, b| {
                config
                    .sorting
                    .iter()
                    .map(|entry| {
                        let ordering = rows[*a]
                            .value(entry.column)
                            .compare(&rows[*b].value(entry.column));
                        if entry.desc {
                            ordering.reverse()
                        } else {
                            ordering
                        }
                    })
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        let top_level = match config.grouping {
            Some(column) => group_rows(rows, &filtered, column),
            None => filtered.iter().copied().map(TopLevelRow::Leaf).collect(),
        };

        let page_size = config.pagination.page_size.max(1);
        let page_count = top_level.len().div_ceil(page_size).max(1);
        let page_index = config.pagination.page_index.min(page_count - 1);

        let page_rows = top_level
            .iter()
            .skip(page_index * page_size)
            .take(page_size)
            .flat_map(|top| match top {
                TopLevelRow::Leaf(index) => vec![DisplayRow::Leaf {
                    index: *index,
                    nested: false,
                }],
                TopLevelRow::Group { key, members } => {
                    let expanded = config.expanded.contains(key);
                    let mut out = vec![DisplayRow::Group {
                        key: key.clone(),
                        count: members.len(),
                        expanded,
                    }];
                    if expanded {
                        out.extend(members.iter().map(|index| DisplayRow::Leaf {
                            index: *index,
                            nested: true,
                        }));
                    }
                    out
                }
            })
            .collect();

        Self {
            filtered,
            top_level,
            page_rows,
            page_index,
            page_count,
        }
    }

    /// Leaf rows passing every filter, in sorted order.
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    pub fn top_level(&self) -> &[TopLevelRow] {
        &self.top_level
    }

    pub fn page_rows(&self) -> &[DisplayRow] {
        &self.page_rows
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

impl FilterPredicate {
    pub fn matches(&self, cell: CellValue<'_>, matcher: &SkimMatcherV2) -> bool {
        match self {
            FilterPredicate::Fuzzy(pattern) => {
                matcher.fuzzy_match(&cell.display(), pattern.trim()).is_some()
            }
            FilterPredicate::OneOf(values) => values.contains(&cell.display()),
            FilterPredicate::Between(range) => {
                cell.as_number().is_some_and(|value| range.contains(value))
            }
            FilterPredicate::DateBetween(start, end) => cell
                .as_date()
                .is_some_and(|date| *start <= date && date <= *end),
        }
    }
}

fn matches_global(row: &RowRecord, pattern: &str, matcher: &SkimMatcherV2) -> bool {
    ColumnId::ALL
        .iter()
        .any(|column| matcher.fuzzy_match(&row.value(*column).display(), pattern).is_some())
}

fn group_rows(rows: &[RowRecord], ordered: &[usize], column: ColumnId) -> Vec<TopLevelRow> {
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for index in ordered {
        let key = rows[*index].value(column).display();
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(*index),
            None => groups.push((key, vec![*index])),
        }
    }
    groups
        .into_iter()
        .map(|(key, members)| TopLevelRow::Group { key, members })
        .collect()
}
