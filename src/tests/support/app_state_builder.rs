use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::{AuthUseCases, UserAdminUseCases};
use crate::auth::application::use_cases::{
    create_user::CreateUserUseCase, delete_user::DeleteUserUseCase, list_users::ListUsersUseCase,
    login_user::LoginUserUseCase, register_user::RegisterUserUseCase,
    update_user::UpdateUserUseCase, update_user_role::UpdateUserRoleUseCase,
};
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::use_cases::{
    create_category::CreateCategoryUseCase, delete_category::DeleteCategoryUseCase,
    get_categories::GetCategoriesUseCase, patch_category::PatchCategoryUseCase,
};
use crate::professional::application::professional_use_cases::ProfessionalUseCases;
use crate::professional::application::use_cases::{
    create_professional::CreateProfessionalUseCase,
    delete_professional::DeleteProfessionalUseCase, get_professionals::GetProfessionalsUseCase,
    get_single_professional::GetSingleProfessionalUseCase,
    patch_professional::PatchProfessionalUseCase,
};
use crate::rating::application::rating_use_cases::RatingUseCases;
use crate::rating::application::use_cases::rate_professional::RateProfessionalUseCase;
use crate::recommendation::application::recommendation_use_cases::RecommendationUseCases;
use crate::recommendation::application::use_cases::{
    get_recommendations::GetRecommendationsUseCase,
    refresh_recommendations::RefreshRecommendationsUseCase,
};
use crate::settings::application::settings_use_cases::SettingsUseCases;
use crate::settings::application::use_cases::{
    get_settings::GetSettingsUseCase, patch_settings::PatchSettingsUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// AppState with every use case stubbed; tests swap in mocks for the one
/// path they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    users: UserAdminUseCases,
    categories: CategoryUseCases,
    professionals: ProfessionalUseCases,
    ratings: RatingUseCases,
    recommendations: RecommendationUseCases,
    settings: SettingsUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUseCase),
                login: Arc::new(StubLoginUseCase),
                logout: Arc::new(StubLogoutUseCase),
            },
            users: UserAdminUseCases {
                list: Arc::new(StubListUsersUseCase),
                create: Arc::new(StubCreateUserUseCase),
                update_role: Arc::new(StubUpdateUserRoleUseCase),
                update: Arc::new(StubUpdateUserUseCase),
                delete: Arc::new(StubDeleteUserUseCase),
            },
            categories: CategoryUseCases {
                get_list: Arc::new(StubGetCategoriesUseCase),
                get_by_slug: Arc::new(StubGetCategoryBySlugUseCase),
                get_subcategories: Arc::new(StubGetSubcategoriesUseCase),
                create: Arc::new(StubCreateCategoryUseCase),
                patch: Arc::new(StubPatchCategoryUseCase),
                delete: Arc::new(StubDeleteCategoryUseCase),
            },
            professionals: ProfessionalUseCases {
                get_list: Arc::new(StubGetProfessionalsUseCase),
                get_single: Arc::new(StubGetSingleProfessionalUseCase),
                create: Arc::new(StubCreateProfessionalUseCase),
                patch: Arc::new(StubPatchProfessionalUseCase),
                delete: Arc::new(StubDeleteProfessionalUseCase),
                assign_category: Arc::new(StubAssignCategoryUseCase),
                remove_category: Arc::new(StubRemoveCategoryUseCase),
                get_categories: Arc::new(StubGetProfessionalCategoriesUseCase),
                get_by_category: Arc::new(StubGetProfessionalsByCategoryUseCase),
            },
            ratings: RatingUseCases {
                rate: Arc::new(StubRateProfessionalUseCase),
                list_for_professional: Arc::new(StubGetProfessionalRatingsUseCase),
            },
            recommendations: RecommendationUseCases {
                get: Arc::new(StubGetRecommendationsUseCase::empty()),
                refresh: Arc::new(StubRefreshRecommendationsUseCase::ok()),
            },
            settings: SettingsUseCases {
                get: Arc::new(StubGetSettingsUseCase::defaults()),
                patch: Arc::new(StubPatchSettingsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + 'static) -> Self {
        self.users.list = Arc::new(uc);
        self
    }

    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + 'static) -> Self {
        self.users.create = Arc::new(uc);
        self
    }

    pub fn with_update_user_role(mut self, uc: impl UpdateUserRoleUseCase + 'static) -> Self {
        self.users.update_role = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + 'static) -> Self {
        self.users.update = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + 'static) -> Self {
        self.users.delete = Arc::new(uc);
        self
    }

    pub fn with_get_categories(mut self, uc: impl GetCategoriesUseCase + 'static) -> Self {
        self.categories.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_category(mut self, uc: impl CreateCategoryUseCase + 'static) -> Self {
        self.categories.create = Arc::new(uc);
        self
    }

    pub fn with_patch_category(mut self, uc: impl PatchCategoryUseCase + 'static) -> Self {
        self.categories.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_category(mut self, uc: impl DeleteCategoryUseCase + 'static) -> Self {
        self.categories.delete = Arc::new(uc);
        self
    }

    pub fn with_get_professionals(mut self, uc: impl GetProfessionalsUseCase + 'static) -> Self {
        self.professionals.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_professional(
        mut self,
        uc: impl GetSingleProfessionalUseCase + 'static,
    ) -> Self {
        self.professionals.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_professional(
        mut self,
        uc: impl CreateProfessionalUseCase + 'static,
    ) -> Self {
        self.professionals.create = Arc::new(uc);
        self
    }

    pub fn with_patch_professional(mut self, uc: impl PatchProfessionalUseCase + 'static) -> Self {
        self.professionals.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_professional(
        mut self,
        uc: impl DeleteProfessionalUseCase + 'static,
    ) -> Self {
        self.professionals.delete = Arc::new(uc);
        self
    }

    pub fn with_rate_professional(mut self, uc: impl RateProfessionalUseCase + 'static) -> Self {
        self.ratings.rate = Arc::new(uc);
        self
    }

    pub fn with_get_recommendations(
        mut self,
        uc: impl GetRecommendationsUseCase + 'static,
    ) -> Self {
        self.recommendations.get = Arc::new(uc);
        self
    }

    pub fn with_refresh_recommendations(
        mut self,
        uc: impl RefreshRecommendationsUseCase + 'static,
    ) -> Self {
        self.recommendations.refresh = Arc::new(uc);
        self
    }

    pub fn with_get_settings(mut self, uc: impl GetSettingsUseCase + 'static) -> Self {
        self.settings.get = Arc::new(uc);
        self
    }

    pub fn with_patch_settings(mut self, uc: impl PatchSettingsUseCase + 'static) -> Self {
        self.settings.patch = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            users: self.users,
            categories: self.categories,
            professionals: self.professionals,
            ratings: self.ratings,
            recommendations: self.recommendations,
            settings: self.settings,
        })
    }
}
