pub mod chirp;
pub mod user;

pub(crate) use chirp::ChirpRecord;
pub(crate) use user::UserRecord;
