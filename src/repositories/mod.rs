pub mod messages;
pub mod presences;
pub mod streams;
pub mod users;
