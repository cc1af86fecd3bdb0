use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{
    auth::adapter::incoming::web::extractors::session::session_cookie,
    auth::application::use_cases::login_user::{LoginCommand, LoginCommandError, LoginError},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[post("/api/login")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> impl Responder {
    let command = match LoginCommand::new(payload.username.clone(), payload.password.clone()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.auth.login.execute(command).await {
        Ok(session) => HttpResponse::Ok()
            .cookie(session_cookie(&session.session_id))
            .json(ApiResponse::body(session.user)),
        Err(err) => map_login_error(err),
    }
}

fn map_command_error(err: LoginCommandError) -> HttpResponse {
    match err {
        LoginCommandError::EmptyUsername => {
            ApiResponse::bad_request("EMPTY_USERNAME", "Username cannot be empty")
        }
        LoginCommandError::EmptyPassword => {
            ApiResponse::bad_request("EMPTY_PASSWORD", "Password cannot be empty")
        }
    }
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        other => {
            tracing::error!("Login failed: {other}");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::auth::application::ports::outgoing::UserView;
    use crate::auth::application::use_cases::login_user::{
        AuthenticatedSession, LoginUserUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockLoginUseCase {
        result: Result<AuthenticatedSession, LoginError>,
    }

    #[async_trait]
    impl LoginUserUseCase for MockLoginUseCase {
        async fn execute(
            &self,
            _command: LoginCommand,
        ) -> Result<AuthenticatedSession, LoginError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn bad_credentials_return_unauthorized() {
        let state = TestAppStateBuilder::default()
            .with_login(MockLoginUseCase {
                result: Err(LoginError::InvalidCredentials),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({"username": "maria", "password": "wrong"}))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value =
            serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn successful_login_returns_user_and_cookie() {
        let session = AuthenticatedSession {
            session_id: "live-session".to_string(),
            user: UserView {
                id: uuid::Uuid::new_v4(),
                username: "maria".to_string(),
                is_admin: true,
                is_super_admin: false,
            },
        };

        let state = TestAppStateBuilder::default()
            .with_login(MockLoginUseCase {
                result: Ok(session),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({"username": "maria", "password": "secret"}))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let set_cookie = resp
            .headers()
            .get("set-cookie")
            .expect("session cookie missing")
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.contains("sid=live-session"));

        let body: serde_json::Value =
            serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["data"]["username"], "maria");
        assert_eq!(body["data"]["is_admin"], true);
        // The hash must never appear in a response
        assert!(body["data"].get("password_hash").is_none());
    }
}
