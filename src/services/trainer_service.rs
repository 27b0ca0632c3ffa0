use serde::Deserialize;
use uuid::Uuid;

use super::client::ApiClient;
use super::ServiceError;

pub struct TrainerService {
    client: ApiClient,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrainerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub assigned_members: u32,
}

impl TrainerService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<TrainerSummary>, ServiceError> {
        self.client.get("/trainers").await
    }

    pub async fn get(&self, id: Uuid) -> Result<TrainerSummary, ServiceError> {
        self.client.get(&format!("/trainers/{id}")).await
    }
}
