pub mod access;
pub mod auth;
pub mod features;
pub mod gym;
pub mod plan;
pub mod routes;
