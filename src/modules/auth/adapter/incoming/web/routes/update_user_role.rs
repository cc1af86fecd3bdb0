use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::SuperAdminUser,
    auth::application::use_cases::update_user_role::{
        UpdateUserRoleCommand, UpdateUserRoleCommandError, UpdateUserRoleError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateRoleRequest {
    pub role: String,
}

#[patch("/api/users/{id}/role")]
pub async fn update_user_role_handler(
    admin: SuperAdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateRoleRequest>,
) -> impl Responder {
    let target = path.into_inner();

    // A super-admin cannot change their own role
    if target == admin.0.id {
        return ApiResponse::bad_request("SELF_ACTION_FORBIDDEN", "Cannot modify your own role");
    }

    let command = match UpdateUserRoleCommand::new(target, &payload.role) {
        Ok(cmd) => cmd,
        Err(UpdateUserRoleCommandError::InvalidRole) => {
            return ApiResponse::bad_request(
                "INVALID_ROLE",
                "Role must be one of user, admin, superadmin",
            );
        }
    };

    match data.users.update_role.execute(command).await {
        Ok(user) => ApiResponse::success(user),
        Err(err) => map_update_role_error(err),
    }
}

fn map_update_role_error(err: UpdateUserRoleError) -> HttpResponse {
    match err {
        UpdateUserRoleError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        UpdateUserRoleError::RepositoryError(msg) => {
            tracing::error!("Role update failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}
