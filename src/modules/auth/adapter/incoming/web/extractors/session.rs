use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    dev::Payload,
    web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    SessionStore, UserQuery, UserView, SESSION_TTL_SECS,
};
use crate::shared::api::ApiResponse;

pub const SESSION_COOKIE: &str = "sid";

pub fn session_cookie(session_id: &str) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, session_id.to_owned())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(SESSION_TTL_SECS as i64))
        .finish()
}

pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .finish()
}

/// The authenticated caller. Role flags are re-read from the store on every
/// request, so promotions and demotions take effect immediately.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
    pub is_super_admin: bool,
}

impl CurrentUser {
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id,
            username: self.username.clone(),
            is_admin: self.is_admin,
            is_super_admin: self.is_super_admin,
        }
    }
}

fn auth_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

async fn resolve_current_user(req: HttpRequest) -> Result<CurrentUser, ActixError> {
    let sessions = match req.app_data::<web::Data<Arc<dyn SessionStore + Send + Sync>>>() {
        Some(store) => store.clone(),
        None => return Err(auth_error(ApiResponse::internal_error())),
    };
    let users = match req.app_data::<web::Data<Arc<dyn UserQuery + Send + Sync>>>() {
        Some(query) => query.clone(),
        None => return Err(auth_error(ApiResponse::internal_error())),
    };

    let session_id = match req.cookie(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => {
            return Err(auth_error(ApiResponse::unauthorized(
                "NO_SESSION",
                "Authentication required",
            )));
        }
    };

    let user_id = sessions
        .resolve(&session_id)
        .await
        .map_err(|e| {
            tracing::error!("Session lookup failed: {e}");
            auth_error(ApiResponse::internal_error())
        })?
        .ok_or_else(|| {
            auth_error(ApiResponse::unauthorized(
                "INVALID_SESSION",
                "Session expired or invalid",
            ))
        })?;

    // Sessions may outlive their user (hard deletes), so a miss here is an
    // auth failure, not a server error
    let user = users
        .by_id(user_id)
        .await
        .map_err(|e| {
            tracing::error!("User lookup failed: {e}");
            auth_error(ApiResponse::internal_error())
        })?
        .ok_or_else(|| {
            auth_error(ApiResponse::unauthorized(
                "INVALID_SESSION",
                "Session expired or invalid",
            ))
        })?;

    Ok(CurrentUser {
        id: user.id,
        username: user.username,
        is_admin: user.is_admin,
        is_super_admin: user.is_super_admin,
    })
}

impl FromRequest for CurrentUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { resolve_current_user(req).await })
    }
}

/// Caller with either admin flag set. Catalog mutations require this.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let user = resolve_current_user(req).await?;

            if !user.is_admin && !user.is_super_admin {
                return Err(auth_error(ApiResponse::forbidden(
                    "ADMIN_REQUIRED",
                    "Administrator access required",
                )));
            }

            Ok(AdminUser(user))
        })
    }
}

/// Caller with the super-admin flag. Gates user management and hard deletes.
#[derive(Debug, Clone)]
pub struct SuperAdminUser(pub CurrentUser);

impl FromRequest for SuperAdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let user = resolve_current_user(req).await?;

            if !user.is_super_admin {
                return Err(auth_error(ApiResponse::forbidden(
                    "SUPER_ADMIN_REQUIRED",
                    "Super administrator access required",
                )));
            }

            Ok(SuperAdminUser(user))
        })
    }
}
