pub mod messages;
pub mod presences;
pub mod users;
