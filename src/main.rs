pub mod modules;
pub use modules::auth;
pub use modules::category;
pub use modules::professional;
pub use modules::rating;
pub use modules::recommendation;
pub use modules::settings;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::session_store_redis::RedisSessionStore;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::{AuthUseCases, UserAdminUseCases};
use crate::auth::application::ports::outgoing::{PasswordHasher, SessionStore, UserQuery};
use crate::auth::application::use_cases::{
    create_user::CreateUserService, delete_user::DeleteUserService, list_users::ListUsersService,
    login_user::LoginUserService, logout_user::LogoutUserService,
    register_user::RegisterUserService, update_user::UpdateUserService,
    update_user_role::UpdateUserRoleService,
};

use crate::category::adapter::outgoing::category_query_postgres::CategoryQueryPostgres;
use crate::category::adapter::outgoing::category_repository_postgres::CategoryRepositoryPostgres;
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::use_cases::{
    create_category::CreateCategoryService, delete_category::DeleteCategoryService,
    get_categories::GetCategoriesService, get_category_by_slug::GetCategoryBySlugService,
    get_subcategories::GetSubcategoriesService, patch_category::PatchCategoryService,
};

use crate::professional::adapter::outgoing::professional_category_repository_postgres::ProfessionalCategoryRepositoryPostgres;
use crate::professional::adapter::outgoing::professional_query_postgres::ProfessionalQueryPostgres;
use crate::professional::adapter::outgoing::professional_repository_postgres::ProfessionalRepositoryPostgres;
use crate::professional::application::professional_use_cases::ProfessionalUseCases;
use crate::professional::application::use_cases::{
    assign_category::AssignCategoryService, create_professional::CreateProfessionalService,
    delete_professional::DeleteProfessionalService,
    get_professional_categories::GetProfessionalCategoriesService,
    get_professionals::GetProfessionalsService,
    get_professionals_by_category::GetProfessionalsByCategoryService,
    get_single_professional::GetSingleProfessionalService,
    patch_professional::PatchProfessionalService, remove_category::RemoveCategoryService,
};

use crate::rating::adapter::outgoing::rating_repository_postgres::RatingRepositoryPostgres;
use crate::rating::application::rating_use_cases::RatingUseCases;
use crate::rating::application::use_cases::{
    get_professional_ratings::GetProfessionalRatingsService,
    rate_professional::RateProfessionalService,
};

use crate::recommendation::adapter::outgoing::recommendation_repository_postgres::RecommendationRepositoryPostgres;
use crate::recommendation::application::recommendation_use_cases::RecommendationUseCases;
use crate::recommendation::application::use_cases::{
    get_recommendations::GetRecommendationsService,
    refresh_recommendations::RefreshRecommendationsService,
};

use crate::settings::adapter::outgoing::settings_repository_postgres::SettingsRepositoryPostgres;
use crate::settings::application::settings_use_cases::SettingsUseCases;
use crate::settings::application::use_cases::{
    get_settings::GetSettingsService, patch_settings::PatchSettingsService,
};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub users: UserAdminUseCases,
    pub categories: CategoryUseCases,
    pub professionals: ProfessionalUseCases,
    pub ratings: RatingUseCases,
    pub recommendations: RecommendationUseCases,
    pub settings: SettingsUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection (server-side session records)
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Shared auth infrastructure
    let hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(Argon2Hasher::from_env());
    let session_store: Arc<dyn SessionStore + Send + Sync> =
        Arc::new(RedisSessionStore::new(Arc::clone(&redis_arc)));

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&hasher),
            Arc::clone(&session_store),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            Arc::clone(&hasher),
            Arc::clone(&session_store),
        )),
        logout: Arc::new(LogoutUserService::new(Arc::clone(&session_store))),
    };

    let users = UserAdminUseCases {
        list: Arc::new(ListUsersService::new(user_query.clone())),
        create: Arc::new(CreateUserService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&hasher),
        )),
        update_role: Arc::new(UpdateUserRoleService::new(user_repo.clone())),
        update: Arc::new(UpdateUserService::new(user_repo.clone(), Arc::clone(&hasher))),
        delete: Arc::new(DeleteUserService::new(user_repo)),
    };

    // Categories
    let category_query = CategoryQueryPostgres::new(Arc::clone(&db_arc));
    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(&db_arc));

    let categories = CategoryUseCases {
        get_list: Arc::new(GetCategoriesService::new(category_query.clone())),
        get_by_slug: Arc::new(GetCategoryBySlugService::new(category_query.clone())),
        get_subcategories: Arc::new(GetSubcategoriesService::new(category_query)),
        create: Arc::new(CreateCategoryService::new(category_repo.clone())),
        patch: Arc::new(PatchCategoryService::new(category_repo.clone())),
        delete: Arc::new(DeleteCategoryService::new(category_repo)),
    };

    // Professionals
    let professional_query = ProfessionalQueryPostgres::new(Arc::clone(&db_arc));
    let professional_repo = ProfessionalRepositoryPostgres::new(Arc::clone(&db_arc));
    let link_repo = ProfessionalCategoryRepositoryPostgres::new(Arc::clone(&db_arc));

    let professionals = ProfessionalUseCases {
        get_list: Arc::new(GetProfessionalsService::new(professional_query.clone())),
        get_single: Arc::new(GetSingleProfessionalService::new(professional_query)),
        create: Arc::new(CreateProfessionalService::new(professional_repo.clone())),
        patch: Arc::new(PatchProfessionalService::new(professional_repo.clone())),
        delete: Arc::new(DeleteProfessionalService::new(professional_repo)),
        assign_category: Arc::new(AssignCategoryService::new(link_repo.clone())),
        remove_category: Arc::new(RemoveCategoryService::new(link_repo.clone())),
        get_categories: Arc::new(GetProfessionalCategoriesService::new(link_repo.clone())),
        get_by_category: Arc::new(GetProfessionalsByCategoryService::new(link_repo)),
    };

    // Ratings + recommendations
    let rating_repo = RatingRepositoryPostgres::new(Arc::clone(&db_arc));
    let recommendation_repo = RecommendationRepositoryPostgres::new(Arc::clone(&db_arc));

    let ratings = RatingUseCases {
        rate: Arc::new(RateProfessionalService::new(rating_repo.clone())),
        list_for_professional: Arc::new(GetProfessionalRatingsService::new(rating_repo)),
    };

    let recommendations = RecommendationUseCases {
        get: Arc::new(GetRecommendationsService::new(recommendation_repo.clone())),
        refresh: Arc::new(RefreshRecommendationsService::new(recommendation_repo)),
    };

    // System settings
    let settings_repo = SettingsRepositoryPostgres::new(Arc::clone(&db_arc));

    let settings = SettingsUseCases {
        get: Arc::new(GetSettingsService::new(settings_repo.clone())),
        patch: Arc::new(PatchSettingsService::new(settings_repo)),
    };

    let state = AppState {
        auth,
        users,
        categories,
        professionals,
        ratings,
        recommendations,
        settings,
    };

    // The session extractors pull these two out of app_data
    let user_query_arc: Arc<dyn UserQuery + Send + Sync> =
        Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(shared::api::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&session_store)))
            .app_data(web::Data::new(Arc::clone(&user_query_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth + session
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_user_handler);
    // User management (super-admin)
    cfg.service(crate::auth::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_role_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_user_handler);
    // Professionals
    cfg.service(crate::professional::adapter::incoming::web::routes::get_professionals_handler);
    cfg.service(crate::professional::adapter::incoming::web::routes::create_professional_handler);
    cfg.service(crate::professional::adapter::incoming::web::routes::patch_professional_handler);
    cfg.service(crate::professional::adapter::incoming::web::routes::delete_professional_handler);
    cfg.service(crate::professional::adapter::incoming::web::routes::assign_category_handler);
    cfg.service(crate::professional::adapter::incoming::web::routes::remove_category_handler);
    cfg.service(
        crate::professional::adapter::incoming::web::routes::get_professional_categories_handler,
    );
    cfg.service(
        crate::professional::adapter::incoming::web::routes::get_professionals_by_category_handler,
    );
    // Ratings (registered before the catch-all /api/professionals/{id})
    cfg.service(crate::rating::adapter::incoming::web::routes::rate_professional_handler);
    cfg.service(crate::rating::adapter::incoming::web::routes::get_professional_ratings_handler);
    cfg.service(crate::professional::adapter::incoming::web::routes::get_single_professional_handler);
    // Categories
    cfg.service(crate::category::adapter::incoming::web::routes::get_categories_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::get_subcategories_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::create_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::patch_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::delete_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::get_category_by_slug_handler);
    // Recommendations
    cfg.service(crate::recommendation::adapter::incoming::web::routes::get_recommendations_handler);
    // System settings
    cfg.service(crate::settings::adapter::incoming::web::routes::get_system_settings_handler);
    cfg.service(crate::settings::adapter::incoming::web::routes::update_system_settings_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
