pub mod api;
pub mod cli;
pub mod commands;
pub mod export;
pub mod models;
pub mod utils;
