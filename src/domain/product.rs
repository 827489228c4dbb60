use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Stock threshold applied when a product does not specify its own.
pub const DEFAULT_MIN_STOCK_LEVEL: i32 = 5;

/// Domain representation of an inventory record.
///
/// Pooled records (`is_assigned == false`) form the general inventory. Records
/// with `is_assigned == true` are per-student instances created at assignment
/// time and owned by exactly one student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Number of units held by this record.
    pub quantity: i32,
    /// Date the product was issued.
    pub date_of_issue: NaiveDate,
    /// Expected or actual return date.
    pub date_of_return: Option<NaiveDate>,
    /// Whether the record is bound to a student.
    pub is_assigned: bool,
    /// Optional free-form grouping such as "Electronics".
    pub category: Option<String>,
    /// Quantity at or below which the product counts as low on stock.
    pub min_stock_level: i32,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
}

impl Product {
    /// Returns `true` when the quantity has dropped to the minimum stock level.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock_level
    }

    /// Build the per-student copy of this product issued on `issued_on`.
    pub fn clone_for_assignment(&self, issued_on: NaiveDate) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            quantity: self.quantity,
            date_of_issue: issued_on,
            date_of_return: None,
            is_assigned: true,
            category: self.category.clone(),
            min_stock_level: self.min_stock_level,
        }
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i32,
    pub date_of_issue: NaiveDate,
    pub date_of_return: Option<NaiveDate>,
    pub is_assigned: bool,
    pub category: Option<String>,
    pub min_stock_level: i32,
}

impl NewProduct {
    /// Build a pooled product payload.
    pub fn new(name: impl Into<String>, quantity: i32, date_of_issue: NaiveDate) -> Self {
        Self {
            name: name.into(),
            quantity,
            date_of_issue,
            date_of_return: None,
            is_assigned: false,
            category: None,
            min_stock_level: DEFAULT_MIN_STOCK_LEVEL,
        }
    }

    /// Build a product payload that is bound to a student from the start.
    pub fn assigned(name: impl Into<String>, quantity: i32, issued_on: NaiveDate) -> Self {
        Self {
            is_assigned: true,
            ..Self::new(name, quantity, issued_on)
        }
    }

    /// Attach a return date to the product payload.
    pub fn with_date_of_return(mut self, date_of_return: NaiveDate) -> Self {
        self.date_of_return = Some(date_of_return);
        self
    }

    /// Attach a category to the product payload.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Override the default minimum stock level.
    pub fn with_min_stock_level(mut self, min_stock_level: i32) -> Self {
        self.min_stock_level = min_stock_level;
        self
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Restrict the results to pooled products (`is_assigned == false`).
    pub available_only: bool,
}

impl ProductListQuery {
    /// Construct a query that targets every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only return products that can still be assigned.
    pub fn available(mut self) -> Self {
        self.available_only = true;
        self
    }
}
