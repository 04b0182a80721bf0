use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::column::{filterable_columns, ColumnId, FilterKind};
use crate::domain::entities::filter::{
    validate_filter_value, DateRange, FilterEntry, FilterError, FilterValue, NumericRange,
};
use crate::domain::entities::record::RowRecord;

/// Current and default filter value for every filterable column, plus the
/// bounds observed in the loaded dataset for the range columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterStore {
    entries: BTreeMap<ColumnId, FilterEntry>,
    numeric_bounds: BTreeMap<ColumnId, NumericRange>,
    date_bounds: BTreeMap<ColumnId, DateRange>,
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterStore {
    pub fn new() -> Self {
        let entries = filterable_columns()
            .filter_map(|descriptor| {
                let kind = descriptor.filter?;
                Some((
                    descriptor.id,
                    FilterEntry::new(descriptor.id, kind, empty_value(kind)),
                ))
            })
            .collect();
        Self {
            entries,
            numeric_bounds: BTreeMap::new(),
            date_bounds: BTreeMap::new(),
        }
    }

    pub fn get(&self, column: ColumnId) -> Option<&FilterEntry> {
        self.entries.get(&column)
    }

    pub fn entries(&self) -> impl Iterator<Item = &FilterEntry> {
        self.entries.values()
    }

    pub fn active_entries(&self) -> impl Iterator<Item = &FilterEntry> {
        self.entries.values().filter(|entry| entry.is_active())
    }

    pub fn numeric_bounds(&self, column: ColumnId) -> Option<NumericRange> {
        self.numeric_bounds.get(&column).copied()
    }

    pub fn date_bounds(&self, column: ColumnId) -> Option<DateRange> {
        self.date_bounds.get(&column).copied()
    }

    /// Writes `value` when it matches the column's kind. Returns whether the
    /// stored value changed; a rejected value leaves the store untouched.
    pub fn set(&mut self, column: ColumnId, value: FilterValue) -> Result<bool, FilterError> {
        let entry = self
            .entries
            .get_mut(&column)
            .ok_or(FilterError::NotFilterable(column))?;
        validate_filter_value(column, Some(entry.kind), &value)?;
        if entry.value == value {
            return Ok(false);
        }
        entry.value = value;
        Ok(true)
    }

    pub fn reset_one(&mut self, column: ColumnId) -> bool {
        self.entries
            .get_mut(&column)
            .map(FilterEntry::reset)
            .unwrap_or(false)
    }

    pub fn reset_all(&mut self) -> bool {
        self.entries
            .values_mut()
            .fold(false, |changed, entry| entry.reset() || changed)
    }

    /// Recomputes the range bounds from freshly loaded rows. Numeric entries
    /// are reset to the new bounds; date entries keep the open pair.
    pub fn load_bounds(&mut self, rows: &[RowRecord]) {
        self.numeric_bounds.clear();
        self.date_bounds.clear();
        for entry in self.entries.values_mut() {
            match entry.kind {
                FilterKind::NumericRange => {
                    let bounds = observed_numeric_bounds(rows, entry.column);
                    self.numeric_bounds.insert(entry.column, bounds);
                    entry.default = FilterValue::Numeric(bounds);
                    entry.value = entry.default.clone();
                }
                FilterKind::DateRange => {
                    let bounds = observed_date_bounds(rows, entry.column);
                    self.date_bounds.insert(entry.column, bounds);
                    entry.value = FilterValue::Dates(DateRange::OPEN);
                }
                FilterKind::FreeText | FilterKind::MultiSelect => {}
            }
        }
    }
}

pub fn empty_value(kind: FilterKind) -> FilterValue {
    match kind {
        FilterKind::FreeText => FilterValue::Text(String::new()),
        FilterKind::MultiSelect => FilterValue::Selection(BTreeSet::new()),
        FilterKind::NumericRange => FilterValue::Numeric(NumericRange::EMPTY),
        FilterKind::DateRange => FilterValue::Dates(DateRange::OPEN),
    }
}

/// Whole-number bounds around the observed values: `floor(min)` and
/// `ceil(max)`, so the default range contains every row.
fn observed_numeric_bounds(rows: &[RowRecord], column: ColumnId) -> NumericRange {
    let mut values = rows
        .iter()
        .filter_map(|row| row.value(column).as_number())
        .filter(|value| value.is_finite());
    let Some(first) = values.next() else {
        return NumericRange::EMPTY;
    };
    let (min, max) = values.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    });
    NumericRange::new(min.floor(), max.ceil())
}

fn observed_date_bounds(rows: &[RowRecord], column: ColumnId) -> DateRange {
    let dates = rows.iter().filter_map(|row| row.value(column).as_date());
    let (earliest, latest) = dates.fold((None, None), |(earliest, latest), date| {
        (
            Some(earliest.map_or(date, |current| std::cmp::min(current, date))),
            Some(latest.map_or(date, |current| std::cmp::max(current, date))),
        )
    });
    DateRange {
        start: earliest,
        end: latest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::row;
    use chrono::NaiveDate;

    #[test]
    fn every_filterable_column_starts_with_its_empty_value() {
        let store = FilterStore::new();
        assert!(store.get(ColumnId::Id).is_none());
        assert_eq!(
            store.get(ColumnId::Name).map(|e| e.value.clone()),
            Some(FilterValue::Text(String::new()))
        );
        assert_eq!(
            store.get(ColumnId::Category).map(|e| e.value.clone()),
            Some(FilterValue::Selection(BTreeSet::new()))
        );
        assert_eq!(
            store.get(ColumnId::UpdatedAt).map(|e| e.value.clone()),
            Some(FilterValue::Dates(DateRange::OPEN))
        );
        assert_eq!(store.active_entries().count(), 0);
    }

    #[test]
    fn mismatched_value_is_rejected_without_a_write() {
        let mut store = FilterStore::new();
        let before = store.clone();

        let result = store.set(ColumnId::Category, FilterValue::Text("A".to_string()));

        assert!(result.is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn setting_the_same_value_twice_reports_no_change() {
        let mut store = FilterStore::new();
        let value = FilterValue::selection(["A"]);

        assert_eq!(store.set(ColumnId::Category, value.clone()), Ok(true));
        let snapshot = store.clone();
        assert_eq!(store.set(ColumnId::Category, value), Ok(false));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn bounds_come_from_the_loaded_rows() {
        let rows = vec![
            row(1, "a", "A", "x", 10.0),
            row(2, "b", "A", "x", 20.0),
            row(3, "c", "B", "y", 30.0),
        ];
        let mut store = FilterStore::new();
        store.load_bounds(&rows);

        assert_eq!(
            store.numeric_bounds(ColumnId::Price),
            Some(NumericRange::new(10.0, 30.0))
        );
        assert_eq!(
            store.get(ColumnId::Price).map(|e| e.value.clone()),
            Some(FilterValue::Numeric(NumericRange::new(10.0, 30.0)))
        );
    }

    #[test]
    fn fractional_prices_widen_bounds_outward() {
        let rows = vec![row(1, "a", "A", "x", 10.4), row(2, "b", "A", "x", 29.2)];
        let mut store = FilterStore::new();
        store.load_bounds(&rows);
        let bounds = store
            .numeric_bounds(ColumnId::Price)
            .expect("price should have bounds");
        assert_eq!(bounds, NumericRange::new(10.0, 30.0));
        assert!(rows.iter().all(|row| bounds.contains(row.price)));
    }

    #[test]
    fn reset_restores_type_correct_defaults_and_keeps_bounds() {
        let rows = vec![row(1, "a", "A", "x", 10.0), row(2, "b", "B", "y", 30.0)];
        let mut store = FilterStore::new();
        store.load_bounds(&rows);
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date");

        store
            .set(ColumnId::Name, FilterValue::Text("lamp".to_string()))
            .expect("text filter");
        store
            .set(ColumnId::Subcategory, FilterValue::selection(["y"]))
            .expect("selection filter");
        store
            .set(ColumnId::Price, FilterValue::Numeric(NumericRange::new(15.0, 30.0)))
            .expect("range filter");
        store
            .set(ColumnId::CreatedAt, FilterValue::Dates(DateRange::between(day, day)))
            .expect("date filter");

        assert!(store.reset_one(ColumnId::Price));
        assert_eq!(
            store.get(ColumnId::Price).map(|e| e.value.clone()),
            Some(FilterValue::Numeric(NumericRange::new(10.0, 30.0)))
        );

        assert!(store.reset_all());
        assert_eq!(
            store.get(ColumnId::Name).map(|e| e.value.clone()),
            Some(FilterValue::Text(String::new()))
        );
        assert_eq!(
            store.get(ColumnId::Subcategory).map(|e| e.value.clone()),
            Some(FilterValue::Selection(BTreeSet::new()))
        );
        assert_eq!(
            store.get(ColumnId::CreatedAt).map(|e| e.value.clone()),
            Some(FilterValue::Dates(DateRange::OPEN))
        );
        assert_eq!(
            store.numeric_bounds(ColumnId::Price),
            Some(NumericRange::new(10.0, 30.0))
        );
        assert!(!store.reset_all(), "second reset changes nothing");
    }

    #[test]
    fn empty_dataset_gives_zero_bounds() {
        let mut store = FilterStore::new();
        store.load_bounds(&[]);
        assert_eq!(
            store.numeric_bounds(ColumnId::SalePrice),
            Some(NumericRange::EMPTY)
        );
        assert_eq!(store.date_bounds(ColumnId::CreatedAt), Some(DateRange::OPEN));
    }
}
