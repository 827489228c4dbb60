use chrono::NaiveDate;
use mockall::mock;
use pushkind_common::repository::errors::RepositoryResult;

use super::{ProductReader, ProductWriter, StudentReader, StudentWriter};
use crate::domain::{
    product::{NewProduct, Product, ProductListQuery},
    student::{AssignmentOutcome, NewStudent, Student, StudentListQuery},
};

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub StudentWriter {}

    impl StudentWriter for StudentWriter {
        fn create_student(&self, new_student: &NewStudent) -> RepositoryResult<Student>;
        fn assign_product(&self, student_id: i32, product_id: i32, assigned_on: NaiveDate) -> RepositoryResult<AssignmentOutcome>;
        fn delete_student(&self, student_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub Roster {}

    impl StudentReader for Roster {
        fn get_student_by_id(&self, id: i32) -> RepositoryResult<Option<Student>>;
        fn list_students(&self, query: StudentListQuery) -> RepositoryResult<Vec<Student>>;
    }

    impl ProductReader for Roster {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }
}
