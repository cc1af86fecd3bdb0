use chrono::Utc;
use uuid::Uuid;

use crate::professional::adapter::outgoing::sea_orm_entity::professionals::Model as ProfessionalModel;
use crate::professional::application::ports::outgoing::ProfessionalView;

pub fn professional_model(
    name: &str,
    occupation: &str,
    average_rating: i32,
    total_ratings: i32,
) -> ProfessionalModel {
    let now = Utc::now().fixed_offset();

    ProfessionalModel {
        id: Uuid::new_v4(),
        name: name.to_string(),
        occupation: occupation.to_string(),
        description: "desc".to_string(),
        photo_url: "https://example.com/photo.jpg".to_string(),
        whatsapp: "+54911555000".to_string(),
        detailed_description: "detail".to_string(),
        location: String::new(),
        average_rating,
        total_ratings,
        category_id: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn professional_view(name: &str, occupation: &str, average_rating: i32) -> ProfessionalView {
    ProfessionalView {
        id: Uuid::new_v4(),
        name: name.to_string(),
        occupation: occupation.to_string(),
        description: "desc".to_string(),
        photo_url: "https://example.com/photo.jpg".to_string(),
        whatsapp: "+54911555000".to_string(),
        detailed_description: "detail".to_string(),
        location: String::new(),
        average_rating,
        total_ratings: 0,
        category_id: None,
        created_at: Utc::now(),
    }
}
