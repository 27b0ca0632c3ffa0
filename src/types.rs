/// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::access::roles::Role;
use crate::entitlements::{plan_from_subscription_name, SubscriptionPlan};

/// Authenticated user identity as returned by the backend.
///
/// `role` is kept as the raw backend string so that unrecognized values
/// survive a round trip through storage; it is normalized once when the
/// session is established (see `SessionStore::set_auth`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub gym_id: Option<Uuid>,
    #[serde(default)]
    pub subscription_name: Option<String>,
}

impl UserProfile {
    /// Canonical role, if the stored role string matches a known role.
    pub fn resolved_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Subscription plan resolved from the raw backend plan label.
    /// Always succeeds; unresolved labels fall back to `Starter`.
    pub fn resolved_plan(&self) -> SubscriptionPlan {
        plan_from_subscription_name(self.subscription_name.as_deref())
    }
}
