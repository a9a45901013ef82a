pub mod admin;
pub mod document;
pub mod token;
