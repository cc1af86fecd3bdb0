use actix_web::{delete, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::SuperAdminUser,
    auth::application::use_cases::delete_user::DeleteUserError, shared::api::ApiResponse, AppState,
};

#[delete("/api/users/{id}")]
pub async fn delete_user_handler(
    admin: SuperAdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = path.into_inner();

    // A super-admin cannot delete their own account
    if target == admin.0.id {
        return ApiResponse::bad_request("SELF_ACTION_FORBIDDEN", "Cannot delete your own account");
    }

    match data.users.delete.execute(target).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_error(err),
    }
}

fn map_delete_error(err: DeleteUserError) -> HttpResponse {
    match err {
        DeleteUserError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        DeleteUserError::RepositoryError(msg) => {
            tracing::error!("User delete failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}
