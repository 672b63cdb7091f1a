pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod download;
pub mod error;
pub mod meeting;
