use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnId {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "category")]
    Category,
    #[serde(rename = "subcategory")]
    Subcategory,
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "updatedAt")]
    UpdatedAt,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "sale_price")]
    SalePrice,
}

impl ColumnId {
    pub const ALL: [ColumnId; 8] = [
        ColumnId::Id,
        ColumnId::Name,
        ColumnId::Category,
        ColumnId::Subcategory,
        ColumnId::CreatedAt,
        ColumnId::UpdatedAt,
        ColumnId::Price,
        ColumnId::SalePrice,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Category => "category",
            Self::Subcategory => "subcategory",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::Price => "price",
            Self::SalePrice => "sale_price",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.as_str() == value)
    }

    pub fn descriptor(self) -> &'static ColumnDescriptor {
        // COLUMNS is declared in ALL order.
        &COLUMNS[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Identifier,
    Text,
    Category,
    Numeric,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    FreeText,
    MultiSelect,
    NumericRange,
    DateRange,
}

impl FilterKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FreeText => "free-text",
            Self::MultiSelect => "multi-select",
            Self::NumericRange => "numeric-range",
            Self::DateRange => "date-range",
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub id: ColumnId,
    pub label: &'static str,
    pub kind: DataKind,
    pub sortable: bool,
    pub filter: Option<FilterKind>,
    pub groupable: bool,
}

pub static COLUMNS: [ColumnDescriptor; 8] = [
    ColumnDescriptor {
        id: ColumnId::Id,
        label: "ID",
        kind: DataKind::Identifier,
        sortable: true,
        filter: None,
        groupable: false,
    },
    ColumnDescriptor {
        id: ColumnId::Name,
        label: "Name",
        kind: DataKind::Text,
        sortable: true,
        filter: Some(FilterKind::FreeText),
        groupable: false,
    },
    ColumnDescriptor {
        id: ColumnId::Category,
        label: "Category",
        kind: DataKind::Category,
        sortable: true,
        filter: Some(FilterKind::MultiSelect),
        groupable: true,
    },
    ColumnDescriptor {
        id: ColumnId::Subcategory,
        label: "Subcategory",
        kind: DataKind::Category,
        sortable: true,
        filter: Some(FilterKind::MultiSelect),
        groupable: true,
    },
    ColumnDescriptor {
        id: ColumnId::CreatedAt,
        label: "Created At",
        kind: DataKind::Date,
        sortable: true,
        filter: Some(FilterKind::DateRange),
        groupable: false,
    },
    ColumnDescriptor {
        id: ColumnId::UpdatedAt,
        label: "Updated At",
        kind: DataKind::Date,
        sortable: true,
        filter: Some(FilterKind::DateRange),
        groupable: false,
    },
    ColumnDescriptor {
        id: ColumnId::Price,
        label: "Price",
        kind: DataKind::Numeric,
        sortable: true,
        filter: Some(FilterKind::NumericRange),
        groupable: false,
    },
    ColumnDescriptor {
        id: ColumnId::SalePrice,
        label: "Sale Price",
        kind: DataKind::Numeric,
        sortable: true,
        filter: Some(FilterKind::NumericRange),
        groupable: false,
    },
];

pub fn filterable_columns() -> impl Iterator<Item = &'static ColumnDescriptor> {
    COLUMNS.iter().filter(|column| column.filter.is_some())
}

pub fn groupable_columns() -> impl Iterator<Item = &'static ColumnDescriptor> {
    COLUMNS.iter().filter(|column| column.groupable)
}
