pub mod professional_category_repository_postgres;
pub mod professional_query_postgres;
pub mod professional_repository_postgres;
pub mod sea_orm_entity;
