pub mod auth;
pub mod document;
