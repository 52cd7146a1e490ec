pub mod dto;
pub mod oauth2;
pub mod repository;
pub mod types;
