pub mod access;
pub mod cli;
pub mod config;
pub mod entitlements;
pub mod error;
pub mod services;
pub mod session;
pub mod types;
