pub mod cli;
pub mod error;
pub mod github;
pub mod health;
pub mod server;
pub mod types;
