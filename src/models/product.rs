use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub date_of_issue: NaiveDate,
    pub date_of_return: Option<NaiveDate>,
    pub is_assigned: bool,
    pub category: Option<String>,
    pub min_stock_level: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub quantity: i32,
    pub date_of_issue: NaiveDate,
    pub date_of_return: Option<NaiveDate>,
    pub is_assigned: bool,
    pub category: Option<&'a str>,
    pub min_stock_level: i32,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            quantity: value.quantity,
            date_of_issue: value.date_of_issue,
            date_of_return: value.date_of_return,
            is_assigned: value.is_assigned,
            category: value.category,
            min_stock_level: value.min_stock_level,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            quantity: value.quantity,
            date_of_issue: value.date_of_issue,
            date_of_return: value.date_of_return,
            is_assigned: value.is_assigned,
            category: value.category.as_deref(),
            min_stock_level: value.min_stock_level,
        }
    }
}
