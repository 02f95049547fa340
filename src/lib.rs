pub mod api;
pub mod chat;
pub mod cli;
pub mod config;
pub mod continuity;
pub mod error;
pub mod models;
pub mod prompt;
pub mod report;
pub mod safety;
pub mod store;
pub mod transcript;
pub mod ui;
