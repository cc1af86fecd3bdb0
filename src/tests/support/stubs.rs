//! Default stand-ins for every use-case trait, so route tests only have to
//! mock the one use case they exercise.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{UserRecord, UserView};
use crate::auth::application::use_cases::{
    create_user::{CreateUserCommand, CreateUserError, CreateUserUseCase},
    delete_user::{DeleteUserError, DeleteUserUseCase},
    list_users::{ListUsersError, ListUsersUseCase},
    login_user::{AuthenticatedSession, LoginCommand, LoginError, LoginUserUseCase},
    logout_user::{LogoutError, LogoutUserUseCase},
    register_user::{RegisterCommand, RegisterError, RegisterUserUseCase},
    update_user::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase},
    update_user_role::{UpdateUserRoleCommand, UpdateUserRoleError, UpdateUserRoleUseCase},
};
use crate::category::application::ports::outgoing::CategoryView;
use crate::category::application::use_cases::{
    create_category::{CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase},
    delete_category::{DeleteCategoryError, DeleteCategoryUseCase},
    get_categories::{GetCategoriesError, GetCategoriesUseCase},
    get_category_by_slug::{GetCategoryBySlugError, GetCategoryBySlugUseCase},
    get_subcategories::{GetSubcategoriesError, GetSubcategoriesUseCase},
    patch_category::{PatchCategoryCommand, PatchCategoryError, PatchCategoryUseCase},
};
use crate::auth::application::domain::entities::UserId;
use crate::professional::application::ports::outgoing::{CategoryAssignment, ProfessionalView};
use crate::professional::application::use_cases::{
    assign_category::{AssignCategoryError, AssignCategoryUseCase},
    create_professional::{
        CreateProfessionalCommand, CreateProfessionalError, CreateProfessionalUseCase,
    },
    delete_professional::{DeleteProfessionalError, DeleteProfessionalUseCase},
    get_professional_categories::{
        GetProfessionalCategoriesError, GetProfessionalCategoriesUseCase,
    },
    get_professionals::{GetProfessionalsError, GetProfessionalsUseCase},
    get_professionals_by_category::{
        GetProfessionalsByCategoryError, GetProfessionalsByCategoryUseCase,
    },
    get_single_professional::{GetSingleProfessionalError, GetSingleProfessionalUseCase},
    patch_professional::{PatchProfessionalCommand, PatchProfessionalError, PatchProfessionalUseCase},
    remove_category::{RemoveCategoryError, RemoveCategoryUseCase},
};
use crate::rating::application::ports::outgoing::RatingRecord;
use crate::rating::application::use_cases::{
    get_professional_ratings::{GetProfessionalRatingsError, GetProfessionalRatingsUseCase},
    rate_professional::{RateProfessionalCommand, RateProfessionalError, RateProfessionalUseCase},
};
use crate::recommendation::application::use_cases::{
    get_recommendations::{GetRecommendationsError, GetRecommendationsUseCase},
    refresh_recommendations::{RefreshRecommendationsError, RefreshRecommendationsUseCase},
};
use crate::settings::application::ports::outgoing::SettingsView;
use crate::settings::application::use_cases::{
    get_settings::{GetSettingsError, GetSettingsUseCase},
    patch_settings::{PatchSettingsCommand, PatchSettingsError, PatchSettingsUseCase},
};

fn stub_user_view(username: &str) -> UserView {
    UserRecord {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password_hash: "$argon2id$stub".to_string(),
        is_admin: false,
        is_super_admin: false,
    }
    .view()
}

// ============================================================
// Auth
// ============================================================

pub struct StubRegisterUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUseCase {
    async fn execute(
        &self,
        command: RegisterCommand,
    ) -> Result<AuthenticatedSession, RegisterError> {
        Ok(AuthenticatedSession {
            session_id: "stub-session".to_string(),
            user: stub_user_view(command.username()),
        })
    }
}

pub struct StubLoginUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<AuthenticatedSession, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubLogoutUseCase;

#[async_trait]
impl LogoutUserUseCase for StubLogoutUseCase {
    async fn execute(&self, _session_id: &str) -> Result<(), LogoutError> {
        Ok(())
    }
}

pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self) -> Result<Vec<UserView>, ListUsersError> {
        Ok(vec![])
    }
}

pub struct StubCreateUserUseCase;

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, command: CreateUserCommand) -> Result<UserView, CreateUserError> {
        Ok(UserView {
            id: Uuid::new_v4(),
            username: command.username().to_string(),
            is_admin: command.role().is_admin(),
            is_super_admin: command.role().is_super_admin(),
        })
    }
}

pub struct StubUpdateUserRoleUseCase;

#[async_trait]
impl UpdateUserRoleUseCase for StubUpdateUserRoleUseCase {
    async fn execute(
        &self,
        _command: UpdateUserRoleCommand,
    ) -> Result<UserView, UpdateUserRoleError> {
        Err(UpdateUserRoleError::UserNotFound)
    }
}

pub struct StubUpdateUserUseCase;

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(&self, _command: UpdateUserCommand) -> Result<UserView, UpdateUserError> {
        Err(UpdateUserError::UserNotFound)
    }
}

pub struct StubDeleteUserUseCase;

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteUserError> {
        Err(DeleteUserError::UserNotFound)
    }
}

// ============================================================
// Categories
// ============================================================

pub struct StubGetCategoriesUseCase;

#[async_trait]
impl GetCategoriesUseCase for StubGetCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<CategoryView>, GetCategoriesError> {
        Ok(vec![])
    }
}

pub struct StubGetCategoryBySlugUseCase;

#[async_trait]
impl GetCategoryBySlugUseCase for StubGetCategoryBySlugUseCase {
    async fn execute(&self, _slug: &str) -> Result<CategoryView, GetCategoryBySlugError> {
        Err(GetCategoryBySlugError::NotFound)
    }
}

pub struct StubGetSubcategoriesUseCase;

#[async_trait]
impl GetSubcategoriesUseCase for StubGetSubcategoriesUseCase {
    async fn execute(
        &self,
        _parent_id: Uuid,
    ) -> Result<Vec<CategoryView>, GetSubcategoriesError> {
        Ok(vec![])
    }
}

pub struct StubCreateCategoryUseCase;

#[async_trait]
impl CreateCategoryUseCase for StubCreateCategoryUseCase {
    async fn execute(
        &self,
        _command: CreateCategoryCommand,
    ) -> Result<CategoryView, CreateCategoryError> {
        Err(CreateCategoryError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubPatchCategoryUseCase;

#[async_trait]
impl PatchCategoryUseCase for StubPatchCategoryUseCase {
    async fn execute(
        &self,
        _command: PatchCategoryCommand,
    ) -> Result<CategoryView, PatchCategoryError> {
        Err(PatchCategoryError::CategoryNotFound)
    }
}

pub struct StubDeleteCategoryUseCase;

#[async_trait]
impl DeleteCategoryUseCase for StubDeleteCategoryUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteCategoryError> {
        Err(DeleteCategoryError::CategoryNotFound)
    }
}

// ============================================================
// Professionals
// ============================================================

pub struct StubGetProfessionalsUseCase;

#[async_trait]
impl GetProfessionalsUseCase for StubGetProfessionalsUseCase {
    async fn execute(&self) -> Result<Vec<ProfessionalView>, GetProfessionalsError> {
        Ok(vec![])
    }
}

pub struct StubGetSingleProfessionalUseCase;

#[async_trait]
impl GetSingleProfessionalUseCase for StubGetSingleProfessionalUseCase {
    async fn execute(&self, _id: Uuid) -> Result<ProfessionalView, GetSingleProfessionalError> {
        Err(GetSingleProfessionalError::NotFound)
    }
}

pub struct StubCreateProfessionalUseCase;

#[async_trait]
impl CreateProfessionalUseCase for StubCreateProfessionalUseCase {
    async fn execute(
        &self,
        _command: CreateProfessionalCommand,
    ) -> Result<ProfessionalView, CreateProfessionalError> {
        Err(CreateProfessionalError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubPatchProfessionalUseCase;

#[async_trait]
impl PatchProfessionalUseCase for StubPatchProfessionalUseCase {
    async fn execute(
        &self,
        _command: PatchProfessionalCommand,
    ) -> Result<ProfessionalView, PatchProfessionalError> {
        Err(PatchProfessionalError::ProfessionalNotFound)
    }
}

pub struct StubDeleteProfessionalUseCase;

#[async_trait]
impl DeleteProfessionalUseCase for StubDeleteProfessionalUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteProfessionalError> {
        Err(DeleteProfessionalError::ProfessionalNotFound)
    }
}

pub struct StubAssignCategoryUseCase;

#[async_trait]
impl AssignCategoryUseCase for StubAssignCategoryUseCase {
    async fn execute(
        &self,
        professional_id: Uuid,
        category_id: Uuid,
    ) -> Result<CategoryAssignment, AssignCategoryError> {
        Ok(CategoryAssignment {
            professional_id,
            category_id,
        })
    }
}

pub struct StubRemoveCategoryUseCase;

#[async_trait]
impl RemoveCategoryUseCase for StubRemoveCategoryUseCase {
    async fn execute(
        &self,
        _professional_id: Uuid,
        _category_id: Uuid,
    ) -> Result<(), RemoveCategoryError> {
        Err(RemoveCategoryError::LinkNotFound)
    }
}

pub struct StubGetProfessionalCategoriesUseCase;

#[async_trait]
impl GetProfessionalCategoriesUseCase for StubGetProfessionalCategoriesUseCase {
    async fn execute(
        &self,
        _professional_id: Uuid,
    ) -> Result<Vec<CategoryView>, GetProfessionalCategoriesError> {
        Ok(vec![])
    }
}

pub struct StubGetProfessionalsByCategoryUseCase;

#[async_trait]
impl GetProfessionalsByCategoryUseCase for StubGetProfessionalsByCategoryUseCase {
    async fn execute(
        &self,
        _category_id: Uuid,
    ) -> Result<Vec<ProfessionalView>, GetProfessionalsByCategoryError> {
        Ok(vec![])
    }
}

// ============================================================
// Ratings
// ============================================================

pub struct StubRateProfessionalUseCase;

#[async_trait]
impl RateProfessionalUseCase for StubRateProfessionalUseCase {
    async fn execute(
        &self,
        command: RateProfessionalCommand,
    ) -> Result<RatingRecord, RateProfessionalError> {
        Ok(RatingRecord {
            id: Uuid::new_v4(),
            user_id: command.rater().value(),
            professional_id: command.professional_id(),
            rating: command.rating(),
            comment: command.comment().cloned(),
            created_at: Utc::now(),
        })
    }
}

pub struct StubGetProfessionalRatingsUseCase;

#[async_trait]
impl GetProfessionalRatingsUseCase for StubGetProfessionalRatingsUseCase {
    async fn execute(
        &self,
        _professional_id: Uuid,
    ) -> Result<Vec<RatingRecord>, GetProfessionalRatingsError> {
        Ok(vec![])
    }
}

// ============================================================
// Recommendations
// ============================================================

pub struct StubGetRecommendationsUseCase {
    items: Vec<ProfessionalView>,
}

impl StubGetRecommendationsUseCase {
    pub fn empty() -> Self {
        Self { items: vec![] }
    }

    pub fn with(items: Vec<ProfessionalView>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl GetRecommendationsUseCase for StubGetRecommendationsUseCase {
    async fn execute(
        &self,
        _user: UserId,
    ) -> Result<Vec<ProfessionalView>, GetRecommendationsError> {
        Ok(self.items.clone())
    }
}

pub struct StubRefreshRecommendationsUseCase {
    fail: bool,
}

impl StubRefreshRecommendationsUseCase {
    pub fn ok() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl RefreshRecommendationsUseCase for StubRefreshRecommendationsUseCase {
    async fn execute(&self, _user: UserId) -> Result<(), RefreshRecommendationsError> {
        if self.fail {
            return Err(RefreshRecommendationsError::RepositoryError(
                "refresh stub failure".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================
// System settings
// ============================================================

pub struct StubGetSettingsUseCase {
    show_ratings: bool,
    allow_ratings: bool,
}

impl StubGetSettingsUseCase {
    pub fn defaults() -> Self {
        Self::with_flags(true, true)
    }

    pub fn with_flags(show_ratings: bool, allow_ratings: bool) -> Self {
        Self {
            show_ratings,
            allow_ratings,
        }
    }
}

#[async_trait]
impl GetSettingsUseCase for StubGetSettingsUseCase {
    async fn execute(&self) -> Result<SettingsView, GetSettingsError> {
        Ok(SettingsView {
            show_ratings: self.show_ratings,
            allow_ratings: self.allow_ratings,
            updated_at: Utc::now(),
        })
    }
}

pub struct StubPatchSettingsUseCase;

#[async_trait]
impl PatchSettingsUseCase for StubPatchSettingsUseCase {
    async fn execute(
        &self,
        command: PatchSettingsCommand,
    ) -> Result<SettingsView, PatchSettingsError> {
        Ok(SettingsView {
            show_ratings: command.show_ratings.unwrap_or(true),
            allow_ratings: command.allow_ratings.unwrap_or(true),
            updated_at: Utc::now(),
        })
    }
}
