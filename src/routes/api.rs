use actix_web::{HttpResponse, Responder, get, web};
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::repository::DieselRepository;
use crate::services::products::ProductsQuery;
use crate::services::{ServiceError, products, students};

#[get("/v1/products")]
/// Return a JSON list of products; `?available=true` keeps only pooled ones.
///
/// Users without the role stored in `crate::SERVICE_ACCESS_ROLE` receive a `401 Unauthorized` response.
pub async fn api_v1_products(
    params: web::Query<ProductsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::load_products(repo.get_ref(), &user, params.into_inner()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/students")]
/// Return a JSON list of students with their products resolved.
pub async fn api_v1_students(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match students::load_students(repo.get_ref(), &user) {
        Ok(students) => HttpResponse::Ok().json(students),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(err) => {
            log::error!("Failed to list students: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
