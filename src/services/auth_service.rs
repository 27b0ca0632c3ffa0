use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use super::ServiceError;
use crate::types::UserProfile;

/// Wrapper for the authentication endpoints. Failures surface as a
/// rejected operation carrying the backend's human-readable message; no
/// retries, the caller decides what to do.
pub struct AuthService {
    client: ApiClient,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
struct ChangePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_config() -> Result<Self, ServiceError> {
        Ok(Self::new(ApiClient::from_config()?))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ServiceError> {
        self.client
            .post("/auth/login", &LoginRequest { email, password })
            .await
    }

    /// Exchange the refresh token for a fresh access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ServiceError> {
        self.client
            .post("/auth/refresh", &RefreshRequest { refresh_token })
            .await
    }

    /// Invalidate the refresh token server-side.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), ServiceError> {
        self.client
            .post_empty("/auth/logout", &RefreshRequest { refresh_token })
            .await
    }

    /// Requires a client carrying the bearer token.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ServiceError> {
        self.client
            .post_empty(
                "/auth/change-password",
                &ChangePasswordRequest {
                    current_password,
                    new_password,
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let response: LoginResponse = serde_json::from_str(
            r#"{
                "user": {
                    "id": "6f2b9a6e-64a6-4f0e-9a2e-0d4f5f3f9f11",
                    "name": "Priya",
                    "email": "priya@example.com",
                    "role": "gymOwner",
                    "subscription_name": "PROFESSIONAL - Most Popular"
                },
                "access_token": "at",
                "refresh_token": "rt"
            }"#,
        )
        .unwrap();

        // Raw backend role spelling survives deserialization; it is
        // normalized only when the session store takes ownership.
        assert_eq!(response.user.role, "gymOwner");
        assert_eq!(response.access_token, "at");
    }
}
