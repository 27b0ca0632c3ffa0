use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::client::ApiClient;
use super::ServiceError;
use crate::entitlements::{plan_from_subscription_name, SubscriptionPlan};

pub struct GymOwnerService {
    client: ApiClient,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSummary {
    pub total_members: u32,
    pub active_members: u32,
    pub total_trainers: u32,
    #[serde(default)]
    pub expiring_this_week: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionInfo {
    /// Free-form backend plan label; resolve with `plan()`.
    pub plan_name: String,
    pub status: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl SubscriptionInfo {
    pub fn plan(&self) -> SubscriptionPlan {
        plan_from_subscription_name(Some(&self.plan_name))
    }
}

impl GymOwnerService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ServiceError> {
        self.client.get("/gym-owner/dashboard").await
    }

    pub async fn current_subscription(&self) -> Result<SubscriptionInfo, ServiceError> {
        self.client.get("/gym-owner/subscription").await
    }
}
