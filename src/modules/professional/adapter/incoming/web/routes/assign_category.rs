use actix_web::{post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminUser,
    professional::application::use_cases::assign_category::AssignCategoryError,
    shared::api::ApiResponse, AppState,
};

#[post("/api/professionals/{professionalId}/categories/{categoryId}")]
pub async fn assign_category_handler(
    _admin: AdminUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (professional_id, category_id) = path.into_inner();

    match data
        .professionals
        .assign_category
        .execute(professional_id, category_id)
        .await
    {
        Ok(assignment) => ApiResponse::created(assignment),
        Err(err) => map_assign_error(err),
    }
}

fn map_assign_error(err: AssignCategoryError) -> HttpResponse {
    match err {
        AssignCategoryError::ProfessionalNotFound => {
            ApiResponse::not_found("PROFESSIONAL_NOT_FOUND", "Professional not found")
        }
        AssignCategoryError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        AssignCategoryError::RepositoryError(msg) => {
            tracing::error!("Category assignment failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}
