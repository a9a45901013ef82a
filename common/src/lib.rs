pub mod entities;
pub mod error;
pub mod repository;
