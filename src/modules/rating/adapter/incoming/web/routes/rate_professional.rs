use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::CurrentUser,
    auth::application::domain::entities::UserId,
    rating::application::use_cases::rate_professional::{
        RateProfessionalCommand, RateProfessionalCommandError, RateProfessionalError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct RateRequest {
    pub rating: i32,
    pub comment: Option<String>,
}

#[post("/api/professionals/{id}/rate")]
pub async fn rate_professional_handler(
    user: CurrentUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<RateRequest>,
) -> impl Responder {
    // Rating submission can be switched off globally
    match data.settings.get.execute().await {
        Ok(settings) if !settings.allow_ratings => {
            return ApiResponse::forbidden("RATINGS_DISABLED", "Rating submission is disabled");
        }
        Ok(_) => {}
        Err(err) => {
            tracing::error!("Settings lookup failed: {err}");
            return ApiResponse::internal_error();
        }
    }

    let command = match RateProfessionalCommand::new(
        UserId::from(user.id),
        path.into_inner(),
        payload.rating,
        payload.comment.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(RateProfessionalCommandError::RatingOutOfRange) => {
            return ApiResponse::bad_request("RATING_OUT_OF_RANGE", "Rating must be between 1 and 5");
        }
    };

    let record = match data.ratings.rate.execute(command).await {
        Ok(record) => record,
        Err(err) => return map_rate_error(err),
    };

    // Refresh the caller's cached recommendations in-line. The rating is
    // already committed, so a failed refresh is logged and not surfaced.
    if let Err(err) = data.recommendations.refresh.execute(UserId::from(user.id)).await {
        tracing::warn!("Recommendation refresh failed for {}: {err}", user.id);
    }

    ApiResponse::created(record)
}

fn map_rate_error(err: RateProfessionalError) -> HttpResponse {
    match err {
        RateProfessionalError::ProfessionalNotFound => {
            ApiResponse::not_found("PROFESSIONAL_NOT_FOUND", "Professional not found")
        }
        RateProfessionalError::RepositoryError(msg) => {
            tracing::error!("Rating failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    use crate::rating::application::ports::outgoing::RatingRecord;
    use crate::rating::application::use_cases::rate_professional::RateProfessionalUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{
        anonymous_auth_data, logged_in_auth_data, session_header, user_record,
    };
    use crate::tests::support::stubs::{StubGetSettingsUseCase, StubRefreshRecommendationsUseCase};

    #[derive(Clone)]
    struct MockRateUseCase {
        result: Result<RatingRecord, RateProfessionalError>,
    }

    #[async_trait]
    impl RateProfessionalUseCase for MockRateUseCase {
        async fn execute(
            &self,
            _command: RateProfessionalCommand,
        ) -> Result<RatingRecord, RateProfessionalError> {
            self.result.clone()
        }
    }

    fn sample_record(professional_id: Uuid, rating: i32) -> RatingRecord {
        RatingRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            professional_id,
            rating,
            comment: None,
            created_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn anonymous_caller_is_unauthorized() {
        let (sessions, users) = anonymous_auth_data();
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(sessions)
                .app_data(users)
                .service(rate_professional_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/professionals/{}/rate", Uuid::new_v4()))
            .set_json(serde_json::json!({"rating": 5}))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn out_of_range_rating_is_rejected() {
        let user = user_record("rater", false, false);
        let (sessions, users) = logged_in_auth_data(&user);
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(sessions)
                .app_data(users)
                .service(rate_professional_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/professionals/{}/rate", Uuid::new_v4()))
            .insert_header(session_header())
            .set_json(serde_json::json!({"rating": 6}))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value =
            serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["error"]["code"], "RATING_OUT_OF_RANGE");
    }

    #[actix_web::test]
    async fn disabled_ratings_are_refused() {
        let user = user_record("rater", false, false);
        let (sessions, users) = logged_in_auth_data(&user);

        let state = TestAppStateBuilder::default()
            .with_get_settings(StubGetSettingsUseCase::with_flags(true, false))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(sessions)
                .app_data(users)
                .service(rate_professional_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/professionals/{}/rate", Uuid::new_v4()))
            .insert_header(session_header())
            .set_json(serde_json::json!({"rating": 4}))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: serde_json::Value =
            serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["error"]["code"], "RATINGS_DISABLED");
    }

    #[actix_web::test]
    async fn rating_succeeds_even_when_refresh_fails() {
        let user = user_record("rater", false, false);
        let (sessions, users) = logged_in_auth_data(&user);

        let professional_id = Uuid::new_v4();

        let state = TestAppStateBuilder::default()
            .with_rate_professional(MockRateUseCase {
                result: Ok(sample_record(professional_id, 5)),
            })
            .with_refresh_recommendations(StubRefreshRecommendationsUseCase::failing())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(sessions)
                .app_data(users)
                .service(rate_professional_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/professionals/{professional_id}/rate"))
            .insert_header(session_header())
            .set_json(serde_json::json!({"rating": 5, "comment": "Excelente"}))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value =
            serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["data"]["rating"], 5);
    }
}
