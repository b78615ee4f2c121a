pub mod clipboard;
pub mod config;
pub mod scheduled;
pub mod theme;
