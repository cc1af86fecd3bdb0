mod password_hasher;
mod session_store;
mod user_query;
mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use session_store::{SessionStore, SessionStoreError, SESSION_TTL_SECS};
pub use user_query::{UserQuery, UserQueryError, UserRecord, UserView};
pub use user_repository::{CreateUserData, UserFieldUpdate, UserRepository, UserRepositoryError};
