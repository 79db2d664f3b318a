pub mod chirps;
pub mod users;
