use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::column::ColumnId;

pub const DATE_DISPLAY_FORMAT: &str = "%d-%b-%y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub price: f64,
    pub sale_price: f64,
}

impl RowRecord {
    pub fn value(&self, column: ColumnId) -> CellValue<'_> {
        match column {
            ColumnId::Id => CellValue::Integer(self.id),
            ColumnId::Name => CellValue::Text(&self.name),
            ColumnId::Category => CellValue::Text(&self.category),
            ColumnId::Subcategory => CellValue::Text(&self.subcategory),
            ColumnId::CreatedAt => CellValue::Date(self.created_at),
            ColumnId::UpdatedAt => CellValue::Date(self.updated_at),
            ColumnId::Price => CellValue::Number(self.price),
            ColumnId::SalePrice => CellValue::Number(self.sale_price),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Integer(i64),
    Text(&'a str),
    Number(f64),
    Date(DateTime<Utc>),
}

impl CellValue<'_> {
    pub fn display(&self) -> String {
        match self {
            CellValue::Integer(value) => value.to_string(),
            CellValue::Text(value) => (*value).to_string(),
            CellValue::Number(value) => format_number(*value),
            CellValue::Date(value) => value.format(DATE_DISPLAY_FORMAT).to_string(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Integer(value) => Some(*value as f64),
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(value) => Some(value.date_naive()),
            _ => None,
        }
    }

    /// Ascending order between two cells of the same column. Text compares
    /// case-insensitively first so "apple" and "Apple" stay adjacent.
    pub fn compare(&self, other: &CellValue<'_>) -> Ordering {
        match (self, other) {
            (CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            _ => self.display().cmp(&other.display()),
        }
    }
}

pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
