use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::{
    auth::adapter::incoming::web::extractors::session::{expired_session_cookie, SESSION_COOKIE},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Serialize)]
struct LogoutResponse {
    status: &'static str,
}

/// Logout is idempotent: with no cookie, or an already-dead session, the
/// cookie is still cleared and the call succeeds.
#[post("/api/logout")]
pub async fn logout_user_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if let Err(err) = data.auth.logout.execute(cookie.value()).await {
            tracing::error!("Failed to close session: {err}");
            return ApiResponse::internal_error();
        }
    }

    HttpResponse::Ok()
        .cookie(expired_session_cookie())
        .json(ApiResponse::body(LogoutResponse {
            status: "logged_out",
        }))
}
