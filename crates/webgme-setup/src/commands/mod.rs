//! CLI command implementations

pub mod component;
pub mod config;
pub mod init;
