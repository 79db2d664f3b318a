pub mod chirp;
pub mod moderation;
pub mod user;
pub mod validation;
