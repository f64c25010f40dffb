pub mod health;
pub mod tmdb;
pub mod voice_chat;
