pub mod browse;
pub mod chat;
pub mod help;
