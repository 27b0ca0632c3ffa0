//! Typed wrappers over the gym-management REST backend. Each service is a
//! thin request/response client; authorization is enforced server-side,
//! these wrappers only shape the calls and surface failures as typed
//! errors. Nothing here retries.

pub mod auth_service;
pub mod client;
pub mod gym_owner_service;
pub mod member_service;
pub mod trainer_service;

pub use auth_service::{AuthService, LoginResponse};
pub use client::{ApiClient, ApiEnvelope};
pub use gym_owner_service::{DashboardSummary, GymOwnerService, SubscriptionInfo};
pub use member_service::{MemberService, MemberSummary};
pub use trainer_service::{TrainerService, TrainerSummary};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend rejected request ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("unexpected response shape: {0}")]
    InvalidResponse(String),
}
