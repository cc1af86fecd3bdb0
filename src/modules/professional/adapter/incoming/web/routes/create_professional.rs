use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminUser,
    professional::application::use_cases::create_professional::{
        CreateProfessionalCommand, CreateProfessionalCommandError, CreateProfessionalError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateProfessionalRequest {
    pub name: String,
    pub occupation: String,
    pub description: String,
    pub photo_url: String,
    pub whatsapp: String,
    pub detailed_description: String,
    pub location: Option<String>,
    pub category_id: Option<Uuid>,
}

#[post("/api/professionals")]
pub async fn create_professional_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateProfessionalRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateProfessionalCommand::new(
        payload.name,
        payload.occupation,
        payload.description,
        payload.photo_url,
        payload.whatsapp,
        payload.detailed_description,
        payload.location,
        payload.category_id,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.professionals.create.execute(command).await {
        Ok(professional) => ApiResponse::created(professional),
        Err(CreateProfessionalError::RepositoryError(msg)) => {
            tracing::error!("Professional creation failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(err: CreateProfessionalCommandError) -> HttpResponse {
    match err {
        CreateProfessionalCommandError::EmptyField(field) => {
            ApiResponse::bad_request("EMPTY_FIELD", &format!("{field} cannot be empty"))
        }
        CreateProfessionalCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 100 characters")
        }
    }
}
