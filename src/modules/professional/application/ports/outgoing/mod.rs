mod professional_category_repository;
mod professional_query;
mod professional_repository;

pub use professional_category_repository::{
    CategoryAssignment, ProfessionalCategoryRepository, ProfessionalCategoryRepositoryError,
};
pub use professional_query::{ProfessionalQuery, ProfessionalQueryError, ProfessionalView};
pub use professional_repository::{
    CreateProfessionalData, ProfessionalRepository, ProfessionalRepositoryError,
    ProfessionalUpdate,
};
