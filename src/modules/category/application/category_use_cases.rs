use std::sync::Arc;

use crate::category::application::use_cases::{
    create_category::CreateCategoryUseCase, delete_category::DeleteCategoryUseCase,
    get_categories::GetCategoriesUseCase, get_category_by_slug::GetCategoryBySlugUseCase,
    get_subcategories::GetSubcategoriesUseCase, patch_category::PatchCategoryUseCase,
};

#[derive(Clone)]
pub struct CategoryUseCases {
    pub get_list: Arc<dyn GetCategoriesUseCase + Send + Sync>,
    pub get_by_slug: Arc<dyn GetCategoryBySlugUseCase + Send + Sync>,
    pub get_subcategories: Arc<dyn GetSubcategoriesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchCategoryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCategoryUseCase + Send + Sync>,
}
