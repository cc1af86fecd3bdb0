use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{
    auth::adapter::incoming::web::extractors::session::session_cookie,
    auth::application::use_cases::register_user::{
        RegisterCommand, RegisterCommandError, RegisterError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[post("/api/register")]
pub async fn register_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> impl Responder {
    let command = match RegisterCommand::new(payload.username.clone(), payload.password.clone()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.auth.register.execute(command).await {
        Ok(session) => HttpResponse::Created()
            .cookie(session_cookie(&session.session_id))
            .json(ApiResponse::body(session.user)),
        Err(err) => map_register_error(err),
    }
}

fn map_command_error(err: RegisterCommandError) -> HttpResponse {
    match err {
        RegisterCommandError::EmptyUsername => {
            ApiResponse::bad_request("EMPTY_USERNAME", "Username cannot be empty")
        }
        RegisterCommandError::UsernameTooLong => {
            ApiResponse::bad_request("USERNAME_TOO_LONG", "Username must not exceed 50 characters")
        }
        RegisterCommandError::EmptyPassword => {
            ApiResponse::bad_request("EMPTY_PASSWORD", "Password cannot be empty")
        }
    }
}

fn map_register_error(err: RegisterError) -> HttpResponse {
    match err {
        RegisterError::UsernameTaken => {
            ApiResponse::bad_request("USERNAME_TAKEN", "Username already exists")
        }
        other => {
            tracing::error!("Registration failed: {other}");
            ApiResponse::internal_error()
        }
    }
}
