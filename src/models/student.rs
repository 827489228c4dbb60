use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::student::{NewStudent as DomainNewStudent, Student as DomainStudent};
use crate::models::product::Product;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::students)]
pub struct Student {
    pub id: i32,
    pub full_name: String,
    pub roll_number: String,
    pub department: String,
    pub product_id: Option<i32>,
    pub assignment_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::students)]
pub struct NewStudent<'a> {
    pub full_name: &'a str,
    pub roll_number: &'a str,
    pub department: &'a str,
    pub product_id: Option<i32>,
    pub assignment_date: Option<NaiveDate>,
}

impl<'a> NewStudent<'a> {
    /// Build the insertable row, binding it to an already persisted product.
    pub fn from_domain(value: &'a DomainNewStudent, product_id: Option<i32>) -> Self {
        Self {
            full_name: value.full_name.as_str(),
            roll_number: value.roll_number.as_str(),
            department: value.department.as_str(),
            product_id,
            assignment_date: product_id.and(value.assignment_date),
        }
    }
}

/// Changes written when a student's product reference moves.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::students)]
#[diesel(treat_none_as_null = true)]
pub struct StudentAssignment {
    pub product_id: Option<i32>,
    pub assignment_date: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

impl StudentAssignment {
    pub fn bind(product_id: i32, assignment_date: NaiveDate, updated_at: NaiveDateTime) -> Self {
        Self {
            product_id: Some(product_id),
            assignment_date: Some(assignment_date),
            updated_at,
        }
    }

    pub fn clear(updated_at: NaiveDateTime) -> Self {
        Self {
            product_id: None,
            assignment_date: None,
            updated_at,
        }
    }
}

impl From<(Student, Option<Product>)> for DomainStudent {
    fn from((student, product): (Student, Option<Product>)) -> Self {
        Self {
            id: student.id,
            full_name: student.full_name,
            roll_number: student.roll_number,
            department: student.department,
            product_id: student.product_id,
            assignment_date: student.assignment_date,
            product: product.map(Into::into),
            created_at: student.created_at,
            updated_at: student.updated_at,
        }
    }
}
