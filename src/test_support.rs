use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::domain::entities::record::RowRecord;

pub fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|start| start.checked_add_days(Days::new(offset)))
        .expect("fixture date should be valid")
}

fn at_nine(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(9, 0, 0)
        .expect("fixture time should be valid")
        .and_utc()
}

/// Row created `id` days after 2024-01-01, updated ten days later, with a
/// sale price one below `price`.
pub fn row(id: i64, name: &str, category: &str, subcategory: &str, price: f64) -> RowRecord {
    let created = day(id as u64);
    RowRecord {
        id,
        name: name.to_string(),
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        created_at: at_nine(created),
        updated_at: at_nine(created + Days::new(10)),
        price,
        sale_price: price - 1.0,
    }
}

pub fn catalog_rows() -> Vec<RowRecord> {
    vec![
        row(1, "Desk Lamp", "Home", "Lighting", 25.0),
        row(2, "Floor Lamp", "Home", "Lighting", 80.0),
        row(3, "Office Chair", "Furniture", "Seating", 150.0),
        row(4, "Bar Stool", "Furniture", "Seating", 60.0),
        row(5, "Standing Desk", "Furniture", "Desks", 400.0),
        row(6, "Wool Rug", "Home", "Textiles", 120.0),
        row(7, "Throw Pillow", "Home", "Textiles", 15.0),
    ]
}
