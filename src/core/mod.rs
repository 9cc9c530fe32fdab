pub mod app;
pub mod cli;
pub mod config;
pub mod credential;
pub mod models;
pub mod paths;
pub mod providers;
