pub mod collaborators;
pub mod config;
