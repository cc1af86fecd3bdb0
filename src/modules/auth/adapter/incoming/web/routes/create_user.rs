use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{
    auth::adapter::incoming::web::extractors::session::SuperAdminUser,
    auth::application::use_cases::create_user::{
        CreateUserCommand, CreateUserCommandError, CreateUserError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateUserRequest {
    pub username: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

#[post("/api/users")]
pub async fn create_user_handler(
    _admin: SuperAdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> impl Responder {
    let command = match CreateUserCommand::new(
        payload.username.clone(),
        payload.password.clone(),
        &payload.role,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.users.create.execute(command).await {
        Ok(user) => ApiResponse::created(user),
        Err(err) => map_create_error(err),
    }
}

fn map_command_error(err: CreateUserCommandError) -> HttpResponse {
    match err {
        CreateUserCommandError::EmptyUsername => {
            ApiResponse::bad_request("EMPTY_USERNAME", "Username cannot be empty")
        }
        CreateUserCommandError::UsernameTooLong => {
            ApiResponse::bad_request("USERNAME_TOO_LONG", "Username must not exceed 50 characters")
        }
        CreateUserCommandError::EmptyPassword => {
            ApiResponse::bad_request("EMPTY_PASSWORD", "Password cannot be empty")
        }
        CreateUserCommandError::InvalidRole => ApiResponse::bad_request(
            "INVALID_ROLE",
            "Role must be one of user, admin, superadmin",
        ),
    }
}

fn map_create_error(err: CreateUserError) -> HttpResponse {
    match err {
        CreateUserError::UsernameTaken => {
            ApiResponse::bad_request("USERNAME_TAKEN", "Username already exists")
        }
        other => {
            tracing::error!("User creation failed: {other}");
            ApiResponse::internal_error()
        }
    }
}
