pub mod config;
pub mod modpack;
pub mod render;
