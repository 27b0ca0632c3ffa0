use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::client::ApiClient;
use super::ServiceError;

pub struct MemberService {
    client: ApiClient,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub package_name: Option<String>,
    #[serde(default)]
    pub plan_expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_pt_member: bool,
}

impl MemberService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<MemberSummary>, ServiceError> {
        self.client.get("/members").await
    }

    pub async fn get(&self, id: Uuid) -> Result<MemberSummary, ServiceError> {
        self.client.get(&format!("/members/{id}")).await
    }
}
