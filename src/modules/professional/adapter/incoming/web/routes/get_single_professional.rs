use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    professional::application::use_cases::get_single_professional::GetSingleProfessionalError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/professionals/{id}")]
pub async fn get_single_professional_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.professionals.get_single.execute(path.into_inner()).await {
        Ok(professional) => ApiResponse::success(professional),
        Err(GetSingleProfessionalError::NotFound) => {
            ApiResponse::not_found("PROFESSIONAL_NOT_FOUND", "Professional not found")
        }
        Err(GetSingleProfessionalError::QueryError(msg)) => {
            tracing::error!("Professional lookup failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}
