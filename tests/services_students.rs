use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_inventory::SERVICE_ACCESS_ROLE;
use pushkind_inventory::domain::student::AssignmentOutcome;
use pushkind_inventory::forms::products::AddProductForm;
use pushkind_inventory::forms::students::{AddStudentForm, AssignProductForm};
use pushkind_inventory::services::{RemovalOutcome, ServiceError, products, students};

mod common;

fn admin() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "admin".into(),
        email: "admin@example.com".into(),
        hub_id: 1,
        name: "Admin".into(),
        roles: vec![SERVICE_ACCESS_ROLE.to_string()],
        exp: 0,
    }
}

fn laptop_form() -> AddProductForm {
    AddProductForm {
        name: "Laptop".to_string(),
        quantity: 10,
        date_of_issue: "2024-01-01".to_string(),
        date_of_return: None,
        category: None,
        min_stock_level: None,
    }
}

fn student_form(roll_number: &str, product_name: Option<&str>) -> AddStudentForm {
    AddStudentForm {
        full_name: "Alice".to_string(),
        roll_number: roll_number.to_string(),
        department: "CS".to_string(),
        product_name: product_name.map(str::to_string),
        quantity: Some("2".to_string()),
    }
}

#[test]
fn assignment_flow_keeps_pool_intact() {
    let test_db = common::TestDb::new("service_assignment_flow_keeps_pool_intact.db");
    let repo = test_db.repo();
    let user = admin();

    let pooled = products::create_product(&repo, &user, laptop_form()).expect("create product");
    let student =
        students::create_student(&repo, &user, student_form("R100", None)).expect("create student");

    let outcome = students::assign_product(
        &repo,
        &user,
        student.id,
        AssignProductForm {
            product_id: pooled.id,
        },
    )
    .expect("assign product");
    assert!(outcome.is_assigned());

    let page = students::load_students_page(&repo, &user).expect("load students page");
    assert_eq!(page.available_products.len(), 1);
    assert_eq!(page.available_products[0].id, pooled.id);
    let held = page.students[0].product.as_ref().expect("student holds a copy");
    assert_ne!(held.id, pooled.id);

    // Assigning the student's own instance elsewhere is refused.
    let other =
        students::create_student(&repo, &user, student_form("R101", None)).expect("create student");
    let outcome = students::assign_product(
        &repo,
        &user,
        other.id,
        AssignProductForm { product_id: held.id },
    )
    .expect("assign attempt");
    assert_eq!(outcome, AssignmentOutcome::ProductUnavailable);
}

#[test]
fn deleting_records_is_idempotent() {
    let test_db = common::TestDb::new("service_deleting_records_is_idempotent.db");
    let repo = test_db.repo();
    let user = admin();

    let student = students::create_student(&repo, &user, student_form("R100", Some("Laptop")))
        .expect("create student");
    let held_id = student.product_id.expect("product issued");

    assert_eq!(
        products::remove_product(&repo, &user, held_id).expect("remove product"),
        RemovalOutcome::Removed
    );
    assert_eq!(
        products::remove_product(&repo, &user, held_id).expect("remove product again"),
        RemovalOutcome::AlreadyAbsent
    );

    let remaining = students::load_students(&repo, &user).expect("load students");
    assert_eq!(remaining[0].product_id, None);

    assert_eq!(
        students::remove_student(&repo, &user, student.id).expect("remove student"),
        RemovalOutcome::Removed
    );
    assert_eq!(
        students::remove_student(&repo, &user, student.id).expect("remove student again"),
        RemovalOutcome::AlreadyAbsent
    );
}

#[test]
fn duplicate_roll_number_is_a_conflict() {
    let test_db = common::TestDb::new("service_duplicate_roll_number_is_a_conflict.db");
    let repo = test_db.repo();
    let user = admin();

    students::create_student(&repo, &user, student_form("R100", None)).expect("create student");

    let result = students::create_student(&repo, &user, student_form("R100", Some("Laptop")));
    assert!(matches!(result, Err(ServiceError::Conflict)));

    let inventory = products::load_inventory_page(&repo, &user).expect("load inventory");
    assert!(inventory.products.is_empty());
}

#[test]
fn services_require_administrator() {
    let test_db = common::TestDb::new("service_services_require_administrator.db");
    let repo = test_db.repo();
    let user = AuthenticatedUser {
        roles: Vec::new(),
        ..admin()
    };

    assert!(matches!(
        products::create_product(&repo, &user, laptop_form()),
        Err(ServiceError::Unauthorized)
    ));
    assert!(matches!(
        students::load_students_page(&repo, &user),
        Err(ServiceError::Unauthorized)
    ));
    assert!(matches!(
        students::remove_student(&repo, &user, 1),
        Err(ServiceError::Unauthorized)
    ));
}
