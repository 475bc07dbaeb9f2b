pub mod config;
pub mod style;
pub mod walk;
