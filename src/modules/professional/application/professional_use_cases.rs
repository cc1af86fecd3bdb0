use std::sync::Arc;

use crate::professional::application::use_cases::{
    assign_category::AssignCategoryUseCase, create_professional::CreateProfessionalUseCase,
    delete_professional::DeleteProfessionalUseCase,
    get_professional_categories::GetProfessionalCategoriesUseCase,
    get_professionals::GetProfessionalsUseCase,
    get_professionals_by_category::GetProfessionalsByCategoryUseCase,
    get_single_professional::GetSingleProfessionalUseCase,
    patch_professional::PatchProfessionalUseCase, remove_category::RemoveCategoryUseCase,
};

#[derive(Clone)]
pub struct ProfessionalUseCases {
    pub get_list: Arc<dyn GetProfessionalsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProfessionalUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProfessionalUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchProfessionalUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProfessionalUseCase + Send + Sync>,
    pub assign_category: Arc<dyn AssignCategoryUseCase + Send + Sync>,
    pub remove_category: Arc<dyn RemoveCategoryUseCase + Send + Sync>,
    pub get_categories: Arc<dyn GetProfessionalCategoriesUseCase + Send + Sync>,
    pub get_by_category: Arc<dyn GetProfessionalsByCategoryUseCase + Send + Sync>,
}
