pub mod admin;
pub mod document;
pub mod letter;
pub mod reset_token;
