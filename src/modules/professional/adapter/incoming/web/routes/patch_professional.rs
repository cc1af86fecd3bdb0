use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminUser,
    professional::application::ports::outgoing::ProfessionalUpdate,
    professional::application::use_cases::patch_professional::{
        PatchProfessionalCommand, PatchProfessionalCommandError, PatchProfessionalError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct PatchProfessionalRequest {
    pub name: Option<String>,
    pub occupation: Option<String>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub whatsapp: Option<String>,
    pub detailed_description: Option<String>,
    pub location: Option<String>,
    pub category_id: Option<Uuid>,
}

#[patch("/api/professionals/{id}")]
pub async fn patch_professional_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<PatchProfessionalRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let update = ProfessionalUpdate {
        name: payload.name,
        occupation: payload.occupation,
        description: payload.description,
        photo_url: payload.photo_url,
        whatsapp: payload.whatsapp,
        detailed_description: payload.detailed_description,
        location: payload.location,
        category_id: payload.category_id,
    };

    let command = match PatchProfessionalCommand::new(path.into_inner(), update) {
        Ok(cmd) => cmd,
        Err(PatchProfessionalCommandError::EmptyUpdate) => {
            return ApiResponse::bad_request("EMPTY_UPDATE", "Nothing to update");
        }
    };

    match data.professionals.patch.execute(command).await {
        Ok(professional) => ApiResponse::success(professional),
        Err(err) => map_patch_error(err),
    }
}

fn map_patch_error(err: PatchProfessionalError) -> HttpResponse {
    match err {
        PatchProfessionalError::ProfessionalNotFound => {
            ApiResponse::not_found("PROFESSIONAL_NOT_FOUND", "Professional not found")
        }
        PatchProfessionalError::RepositoryError(msg) => {
            tracing::error!("Professional update failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}
