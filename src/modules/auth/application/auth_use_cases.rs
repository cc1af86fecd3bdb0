use std::sync::Arc;

use crate::auth::application::use_cases::{
    create_user::CreateUserUseCase, delete_user::DeleteUserUseCase, list_users::ListUsersUseCase,
    login_user::LoginUserUseCase, logout_user::LogoutUserUseCase,
    register_user::RegisterUserUseCase, update_user::UpdateUserUseCase,
    update_user_role::UpdateUserRoleUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutUserUseCase + Send + Sync>,
}

/// Super-admin user management surface.
#[derive(Clone)]
pub struct UserAdminUseCases {
    pub list: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub create: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub update_role: Arc<dyn UpdateUserRoleUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUserUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
}
