use chrono::NaiveDate;
use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::product::{NewProduct, Product, ProductListQuery};
use crate::domain::student::{AssignmentOutcome, NewStudent, Student, StudentListQuery};

pub mod product;
pub mod student;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over inventory records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over inventory records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Delete a product and clear every student reference to it in one transaction.
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over student records.
pub trait StudentReader {
    fn get_student_by_id(&self, id: i32) -> RepositoryResult<Option<Student>>;
    fn list_students(&self, query: StudentListQuery) -> RepositoryResult<Vec<Student>>;
}

/// Write operations over student records and their product instances.
pub trait StudentWriter {
    /// Insert the student together with its optional product instance.
    fn create_student(&self, new_student: &NewStudent) -> RepositoryResult<Student>;
    /// Bind a fresh copy of a pooled product to the student.
    fn assign_product(
        &self,
        student_id: i32,
        product_id: i32,
        assigned_on: NaiveDate,
    ) -> RepositoryResult<AssignmentOutcome>;
    /// Delete the student and the product instance it holds.
    fn delete_student(&self, student_id: i32) -> RepositoryResult<()>;
}
