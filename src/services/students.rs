use chrono::Local;

use crate::auth::AccessPolicy;
use crate::domain::product::{Product, ProductListQuery};
use crate::domain::student::{AssignmentOutcome, Student, StudentListQuery};
use crate::forms::students::{AddStudentForm, AssignProductForm};
use crate::repository::{ProductReader, StudentReader, StudentWriter};
use crate::services::{RemovalOutcome, ServiceError, ServiceResult, removal_outcome};

/// Data required to render the students template.
pub struct StudentsPageData {
    /// Every student with the product it holds.
    pub students: Vec<Student>,
    /// Pooled products offered in the assignment form.
    pub available_products: Vec<Product>,
}

/// Loads the students page together with the products still available.
pub fn load_students_page<R, U>(repo: &R, user: &U) -> ServiceResult<StudentsPageData>
where
    R: StudentReader + ProductReader + ?Sized,
    U: AccessPolicy + ?Sized,
{
    let students = load_students(repo, user)?;
    let available_products = repo
        .list_products(ProductListQuery::new().available())
        .map_err(ServiceError::from)?;

    Ok(StudentsPageData {
        students,
        available_products,
    })
}

/// Lists every student with the product it holds.
pub fn load_students<R, U>(repo: &R, user: &U) -> ServiceResult<Vec<Student>>
where
    R: StudentReader + ?Sized,
    U: AccessPolicy + ?Sized,
{
    if !user.is_administrator() {
        return Err(ServiceError::Unauthorized);
    }

    repo.list_students(StudentListQuery::new())
        .map_err(ServiceError::from)
}

/// Registers a student, issuing a new product instance when one is named.
pub fn create_student<R, U>(repo: &R, user: &U, form: AddStudentForm) -> ServiceResult<Student>
where
    R: StudentWriter + ?Sized,
    U: AccessPolicy + ?Sized,
{
    if !user.is_administrator() {
        return Err(ServiceError::Unauthorized);
    }

    let new_student = form
        .into_new_student(Local::now().date_naive())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_student(&new_student)
        .map_err(ServiceError::from)
}

/// Gives the student a fresh copy of a pooled product.
///
/// Missing records and already assigned products leave the store untouched and
/// are reported through the returned outcome.
pub fn assign_product<R, U>(
    repo: &R,
    user: &U,
    student_id: i32,
    form: AssignProductForm,
) -> ServiceResult<AssignmentOutcome>
where
    R: StudentWriter + ?Sized,
    U: AccessPolicy + ?Sized,
{
    if !user.is_administrator() {
        return Err(ServiceError::Unauthorized);
    }

    let product_id = form
        .into_product_id()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.assign_product(student_id, product_id, Local::now().date_naive())
        .map_err(ServiceError::from)
}

/// Deletes a student together with the product instance it holds.
pub fn remove_student<R, U>(repo: &R, user: &U, student_id: i32) -> ServiceResult<RemovalOutcome>
where
    R: StudentWriter + ?Sized,
    U: AccessPolicy + ?Sized,
{
    if !user.is_administrator() {
        return Err(ServiceError::Unauthorized);
    }

    removal_outcome(repo.delete_student(student_id))
}
