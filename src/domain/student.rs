use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::product::{NewProduct, Product};

/// Domain representation of a registered student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    /// Unique identifier of the student.
    pub id: i32,
    /// Full name as entered by the administrator.
    pub full_name: String,
    /// Unique roll number.
    pub roll_number: String,
    /// Department code.
    pub department: String,
    /// Identifier of the product instance held by the student.
    pub product_id: Option<i32>,
    /// Date the current product was assigned.
    pub assignment_date: Option<NaiveDate>,
    /// Resolved product referenced by `product_id`.
    pub product: Option<Product>,
    /// Timestamp for when the student record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the student record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to register a new student.
///
/// When `product` is present the repository creates the product and the
/// student in a single transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub full_name: String,
    pub roll_number: String,
    pub department: String,
    /// Product instance created for this student.
    pub product: Option<NewProduct>,
    /// Assignment date recorded together with `product`.
    pub assignment_date: Option<NaiveDate>,
}

impl NewStudent {
    /// Build a student payload without a product.
    pub fn new(
        full_name: impl Into<String>,
        roll_number: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            roll_number: roll_number.into(),
            department: department.into(),
            product: None,
            assignment_date: None,
        }
    }

    /// Issue a fresh product named `name` to the student on `issued_on`.
    pub fn with_product(
        mut self,
        name: impl Into<String>,
        quantity: i32,
        issued_on: NaiveDate,
    ) -> Self {
        self.product = Some(NewProduct::assigned(name, quantity, issued_on));
        self.assignment_date = Some(issued_on);
        self
    }
}

/// Result of an assignment attempt.
///
/// Only `Assigned` reflects a state change; the remaining variants describe
/// why the request was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// The student now holds a fresh copy of the requested product.
    Assigned(Student),
    /// No student with the requested identifier exists.
    StudentMissing,
    /// No product with the requested identifier exists.
    ProductMissing,
    /// The requested product is itself a per-student instance.
    ProductUnavailable,
}

impl AssignmentOutcome {
    /// Returns `true` when the assignment changed the stored state.
    pub fn is_assigned(&self) -> bool {
        matches!(self, AssignmentOutcome::Assigned(_))
    }
}

/// Query definition used to list students.
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    /// Only return students referencing this product.
    pub product_id: Option<i32>,
}

impl StudentListQuery {
    /// Construct a query that targets every student.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results to students referencing `product_id`.
    pub fn product(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_product_records_assignment_date() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 2).expect("valid date");

        let student = NewStudent::new("Alice", "R100", "CS").with_product("Laptop", 2, today);

        let product = student.product.expect("product attached");
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.quantity, 2);
        assert!(product.is_assigned);
        assert_eq!(product.date_of_issue, today);
        assert_eq!(student.assignment_date, Some(today));
    }

    #[test]
    fn plain_student_has_no_product() {
        let student = NewStudent::new("Bob", "R101", "EE");

        assert!(student.product.is_none());
        assert!(student.assignment_date.is_none());
    }
}
