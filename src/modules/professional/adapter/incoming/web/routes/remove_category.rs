use actix_web::{delete, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminUser,
    professional::application::use_cases::remove_category::RemoveCategoryError,
    shared::api::ApiResponse, AppState,
};

#[delete("/api/professionals/{professionalId}/categories/{categoryId}")]
pub async fn remove_category_handler(
    _admin: AdminUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (professional_id, category_id) = path.into_inner();

    match data
        .professionals
        .remove_category
        .execute(professional_id, category_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_remove_error(err),
    }
}

fn map_remove_error(err: RemoveCategoryError) -> HttpResponse {
    match err {
        RemoveCategoryError::LinkNotFound => {
            ApiResponse::not_found("ASSIGNMENT_NOT_FOUND", "Assignment not found")
        }
        RemoveCategoryError::RepositoryError(msg) => {
            tracing::error!("Category removal failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}
