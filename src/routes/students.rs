use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::models::config::CommonServerConfig;
use pushkind_common::routes::{base_context, redirect, render_template};
use tera::Tera;

use crate::domain::student::AssignmentOutcome;
use crate::forms::students::{AddStudentForm, AssignProductForm};
use crate::repository::DieselRepository;
use crate::services::{RemovalOutcome, ServiceError, students};

#[get("/students")]
pub async fn show_students(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<CommonServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match students::load_students_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "students",
                &server_config.auth_service_url,
            );
            context.insert("students", &data.students);
            context.insert("products", &data.available_products);
            render_template(&tera, "students/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list students: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/students/add")]
pub async fn add_student(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<AddStudentForm>,
) -> impl Responder {
    match students::create_student(repo.get_ref(), &user, form.into_inner()) {
        Ok(student) => {
            FlashMessage::success(format!("Студент «{}» добавлен.", student.full_name)).send();
            redirect("/students")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            redirect("/na")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/students")
        }
        Err(ServiceError::Conflict) => {
            FlashMessage::error("Студент с таким номером зачетки уже существует.").send();
            redirect("/students")
        }
        Err(err) => {
            log::error!("Failed to create student: {err}");
            FlashMessage::error("Не удалось добавить студента.").send();
            redirect("/students")
        }
    }
}

#[post("/students/{student_id}/assign")]
pub async fn assign_product(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<AssignProductForm>,
) -> impl Responder {
    let student_id = path.into_inner();

    match students::assign_product(repo.get_ref(), &user, student_id, form.into_inner()) {
        Ok(AssignmentOutcome::Assigned(student)) => {
            FlashMessage::success(format!("Товар выдан студенту «{}».", student.full_name)).send();
            redirect("/students")
        }
        Ok(skipped) => {
            log::warn!("Assignment for student {student_id} skipped: {skipped:?}");
            let message = match skipped {
                AssignmentOutcome::StudentMissing => "Студент не найден.",
                AssignmentOutcome::ProductMissing => "Товар не найден.",
                _ => "Товар уже выдан.",
            };
            FlashMessage::warning(message).send();
            redirect("/students")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            redirect("/na")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/students")
        }
        Err(err) => {
            log::error!("Failed to assign product to student {student_id}: {err}");
            FlashMessage::error("Не удалось выдать товар.").send();
            redirect("/students")
        }
    }
}

#[post("/students/{student_id}/delete")]
pub async fn delete_student(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let student_id = path.into_inner();

    match students::remove_student(repo.get_ref(), &user, student_id) {
        Ok(RemovalOutcome::Removed) => {
            FlashMessage::success("Студент удален.").send();
            redirect("/students")
        }
        Ok(RemovalOutcome::AlreadyAbsent) => {
            log::info!("Student {student_id} was already deleted");
            FlashMessage::info("Студент не найден или уже удален.").send();
            redirect("/students")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to delete student {student_id}: {err}");
            FlashMessage::error("Не удалось удалить студента.").send();
            redirect("/students")
        }
    }
}
