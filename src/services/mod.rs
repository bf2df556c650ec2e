pub mod admin_service;
pub mod character_service;
pub mod favorite_service;
pub mod planet_service;
pub mod user_service;
