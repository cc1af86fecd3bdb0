use actix_web::{delete, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::SuperAdminUser,
    professional::application::use_cases::delete_professional::DeleteProfessionalError,
    shared::api::ApiResponse, AppState,
};

#[delete("/api/professionals/{id}")]
pub async fn delete_professional_handler(
    _admin: SuperAdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.professionals.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_error(err),
    }
}

fn map_delete_error(err: DeleteProfessionalError) -> HttpResponse {
    match err {
        DeleteProfessionalError::ProfessionalNotFound => {
            ApiResponse::not_found("PROFESSIONAL_NOT_FOUND", "Professional not found")
        }
        DeleteProfessionalError::RepositoryError(msg) => {
            tracing::error!("Professional delete failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}
