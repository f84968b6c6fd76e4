pub mod connections;
pub mod conversations;
pub mod events;
pub mod messages;
pub mod users;
