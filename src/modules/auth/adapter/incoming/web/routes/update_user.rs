use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::SuperAdminUser,
    auth::application::use_cases::update_user::{
        UpdateUserCommand, UpdateUserCommandError, UpdateUserError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[patch("/api/users/{id}")]
pub async fn update_user_handler(
    admin: SuperAdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateUserRequest>,
) -> impl Responder {
    let target = path.into_inner();

    if target == admin.0.id {
        return ApiResponse::bad_request("SELF_ACTION_FORBIDDEN", "Cannot modify your own account");
    }

    let command = match UpdateUserCommand::new(
        target,
        payload.username.clone(),
        payload.password.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.users.update.execute(command).await {
        Ok(user) => ApiResponse::success(user),
        Err(err) => map_update_error(err),
    }
}

fn map_command_error(err: UpdateUserCommandError) -> HttpResponse {
    match err {
        UpdateUserCommandError::EmptyUpdate => {
            ApiResponse::bad_request("EMPTY_UPDATE", "Nothing to update")
        }
        UpdateUserCommandError::EmptyUsername => {
            ApiResponse::bad_request("EMPTY_USERNAME", "Username cannot be empty")
        }
        UpdateUserCommandError::UsernameTooLong => {
            ApiResponse::bad_request("USERNAME_TOO_LONG", "Username must not exceed 50 characters")
        }
        UpdateUserCommandError::EmptyPassword => {
            ApiResponse::bad_request("EMPTY_PASSWORD", "Password cannot be empty")
        }
    }
}

fn map_update_error(err: UpdateUserError) -> HttpResponse {
    match err {
        UpdateUserError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        UpdateUserError::UsernameTaken => {
            ApiResponse::bad_request("USERNAME_TAKEN", "Username already exists")
        }
        other => {
            tracing::error!("User update failed: {other}");
            ApiResponse::internal_error()
        }
    }
}
