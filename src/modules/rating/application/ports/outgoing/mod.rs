mod rating_repository;

pub use rating_repository::{NewRating, RatingRecord, RatingRepository, RatingRepositoryError};
