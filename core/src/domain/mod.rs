pub mod auth;
pub mod classification;
pub mod common;
pub mod health;
pub mod knowledge_base;
