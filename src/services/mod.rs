pub mod chirp_service;
pub mod credential_service;
pub mod user_service;
pub mod visit_counter;
