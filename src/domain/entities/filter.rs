use std::collections::BTreeSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::entities::column::{ColumnId, FilterKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub const EMPTY: NumericRange = NumericRange { min: 0.0, max: 0.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub const OPEN: DateRange = DateRange {
        start: None,
        end: None,
    };

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Both endpoints, or nothing: a half-picked range filters nothing.
    pub fn complete(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Selection(BTreeSet<String>),
    Numeric(NumericRange),
    Dates(DateRange),
}

impl FilterValue {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterValue::Text(_) => FilterKind::FreeText,
            FilterValue::Selection(_) => FilterKind::MultiSelect,
            FilterValue::Numeric(_) => FilterKind::NumericRange,
            FilterValue::Dates(_) => FilterKind::DateRange,
        }
    }

    pub fn selection<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Selection(values.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterEntry {
    pub column: ColumnId,
    pub kind: FilterKind,
    pub value: FilterValue,
    pub default: FilterValue,
}

impl FilterEntry {
    pub fn new(column: ColumnId, kind: FilterKind, default: FilterValue) -> Self {
        Self {
            column,
            kind,
            value: default.clone(),
            default,
        }
    }

    pub fn reset(&mut self) -> bool {
        if self.value == self.default {
            return false;
        }
        self.value = self.default.clone();
        true
    }

    /// Whether the entry narrows the row set at all.
    pub fn is_active(&self) -> bool {
        match &self.value {
            FilterValue::Text(text) => !text.trim().is_empty(),
            FilterValue::Selection(values) => !values.is_empty(),
            FilterValue::Numeric(_) => self.value != self.default,
            FilterValue::Dates(range) => range.complete().is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("column {0} has no filter")]
    NotFilterable(ColumnId),
    #[error("column {column} takes a {expected} filter, got {actual}")]
    KindMismatch {
        column: ColumnId,
        expected: FilterKind,
        actual: FilterKind,
    },
    #[error("range for column {0} starts after it ends")]
    InvertedRange(ColumnId),
    #[error("range for column {0} is not a finite number")]
    NonFinite(ColumnId),
}

/// Checks a candidate value against the kind declared for `column`.
pub fn validate_filter_value(
    column: ColumnId,
    expected: Option<FilterKind>,
    value: &FilterValue,
) -> Result<(), FilterError> {
    let Some(expected) = expected else {
        return Err(FilterError::NotFilterable(column));
    };
    let actual = value.kind();
    if actual != expected {
        return Err(FilterError::KindMismatch {
            column,
            expected,
            actual,
        });
    }
    match value {
        FilterValue::Numeric(range) => {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(FilterError::NonFinite(column));
            }
            if range.min > range.max {
                return Err(FilterError::InvertedRange(column));
            }
        }
        FilterValue::Dates(range) => {
            if let Some((start, end)) = range.complete() {
                if start > end {
                    return Err(FilterError::InvertedRange(column));
                }
            }
        }
        FilterValue::Text(_) | FilterValue::Selection(_) => {}
    }
    Ok(())
}
