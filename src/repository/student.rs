use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::{
    domain::product::Product as DomainProduct,
    domain::student::{
        AssignmentOutcome, NewStudent as DomainNewStudent, Student as DomainStudent,
        StudentListQuery,
    },
    models::product::{NewProduct as DbNewProduct, Product as DbProduct},
    models::student::{NewStudent as DbNewStudent, Student as DbStudent, StudentAssignment},
    repository::{DieselRepository, StudentReader, StudentWriter},
};

impl StudentReader for DieselRepository {
    fn get_student_by_id(&self, id: i32) -> RepositoryResult<Option<DomainStudent>> {
        use crate::schema::students;

        let mut conn = self.conn()?;
        let student = students::table
            .filter(students::id.eq(id))
            .first::<DbStudent>(&mut conn)
            .optional()?;

        let Some(student) = student else {
            return Ok(None);
        };

        let product = load_product(&mut conn, student.product_id)?;

        Ok(Some(DomainStudent::from((student, product))))
    }

    fn list_students(&self, query: StudentListQuery) -> RepositoryResult<Vec<DomainStudent>> {
        use crate::schema::students;

        let mut conn = self.conn()?;

        let mut items = students::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(product_id) = query.product_id {
            items = items.filter(students::product_id.eq(product_id));
        }

        let db_students = items
            .order(students::id.asc())
            .load::<DbStudent>(&mut conn)?;

        if db_students.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<i32> = db_students
            .iter()
            .filter_map(|student| student.product_id)
            .collect();
        let products_by_id = load_products_by_id(&mut conn, &product_ids)?;

        let students = db_students
            .into_iter()
            .map(|student| {
                let product = student
                    .product_id
                    .and_then(|id| products_by_id.get(&id).cloned());
                DomainStudent::from((student, product))
            })
            .collect();

        Ok(students)
    }
}

impl StudentWriter for DieselRepository {
    fn create_student(&self, new_student: &DomainNewStudent) -> RepositoryResult<DomainStudent> {
        use crate::schema::{products, students};

        let mut conn = self.conn()?;

        conn.immediate_transaction::<DomainStudent, RepositoryError, _>(|conn| {
            let product = match new_student.product.as_ref() {
                Some(new_product) => Some(
                    diesel::insert_into(products::table)
                        .values(&DbNewProduct::from(new_product))
                        .get_result::<DbProduct>(conn)?,
                ),
                None => None,
            };

            let insertable =
                DbNewStudent::from_domain(new_student, product.as_ref().map(|product| product.id));

            // A taken roll number fails here and rolls back the product above.
            let created = diesel::insert_into(students::table)
                .values(&insertable)
                .get_result::<DbStudent>(conn)?;

            Ok(DomainStudent::from((created, product)))
        })
    }

    fn assign_product(
        &self,
        student_id: i32,
        product_id: i32,
        assigned_on: NaiveDate,
    ) -> RepositoryResult<AssignmentOutcome> {
        use crate::schema::{products, students};

        let mut conn = self.conn()?;

        conn.immediate_transaction::<AssignmentOutcome, RepositoryError, _>(|conn| {
            let Some(student) = students::table
                .filter(students::id.eq(student_id))
                .first::<DbStudent>(conn)
                .optional()?
            else {
                return Ok(AssignmentOutcome::StudentMissing);
            };

            let Some(source) = products::table
                .filter(products::id.eq(product_id))
                .first::<DbProduct>(conn)
                .optional()?
            else {
                return Ok(AssignmentOutcome::ProductMissing);
            };

            if source.is_assigned {
                return Ok(AssignmentOutcome::ProductUnavailable);
            }

            let copy = DomainProduct::from(source).clone_for_assignment(assigned_on);
            let created = diesel::insert_into(products::table)
                .values(&DbNewProduct::from(&copy))
                .get_result::<DbProduct>(conn)?;

            let changes = StudentAssignment::bind(created.id, assigned_on, Utc::now().naive_utc());
            let updated = diesel::update(students::table.filter(students::id.eq(student.id)))
                .set(&changes)
                .get_result::<DbStudent>(conn)?;

            // The previously held instance belongs to nobody once the student moves on.
            if let Some(previous_id) = student.product_id {
                diesel::delete(products::table.filter(products::id.eq(previous_id)))
                    .execute(conn)?;
            }

            Ok(AssignmentOutcome::Assigned(DomainStudent::from((
                updated,
                Some(created),
            ))))
        })
    }

    fn delete_student(&self, student_id: i32) -> RepositoryResult<()> {
        use crate::schema::{products, students};

        let mut conn = self.conn()?;

        conn.immediate_transaction::<(), RepositoryError, _>(|conn| {
            let student = students::table
                .filter(students::id.eq(student_id))
                .first::<DbStudent>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            diesel::delete(students::table.filter(students::id.eq(student.id))).execute(conn)?;

            if let Some(product_id) = student.product_id {
                diesel::delete(products::table.filter(products::id.eq(product_id)))
                    .execute(conn)?;
            }

            Ok(())
        })
    }
}

fn load_product(
    conn: &mut SqliteConnection,
    product_id: Option<i32>,
) -> RepositoryResult<Option<DbProduct>> {
    use crate::schema::products;

    let Some(product_id) = product_id else {
        return Ok(None);
    };

    let product = products::table
        .filter(products::id.eq(product_id))
        .first::<DbProduct>(conn)
        .optional()?;

    Ok(product)
}

fn load_products_by_id(
    conn: &mut SqliteConnection,
    product_ids: &[i32],
) -> RepositoryResult<HashMap<i32, DbProduct>> {
    use crate::schema::products;

    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = products::table
        .filter(products::id.eq_any(product_ids))
        .load::<DbProduct>(conn)?;

    Ok(rows.into_iter().map(|product| (product.id, product)).collect())
}
