use serde::{Deserialize, Serialize};

/// Route users land on when they must (re)authenticate.
pub const LOGIN_PATH: &str = "/login";

/// Coarse-grained user partitions. Exactly one role per authenticated
/// session; each role owns a disjoint route set, except `Member` and
/// `PtMember` which intentionally share the same pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    GymOwner,
    Trainer,
    Member,
    PtMember,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Admin, Role::GymOwner, Role::Trainer, Role::Member, Role::PtMember];

    /// Canonical wire spelling, matching what `normalize_role` produces.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::GymOwner => "GYM_OWNER",
            Role::Trainer => "TRAINER",
            Role::Member => "MEMBER",
            Role::PtMember => "PT_MEMBER",
        }
    }

    /// Parse an already-normalized role string. Returns `None` for anything
    /// the registry does not know, which downstream degrades to "no routes".
    pub fn parse(normalized: &str) -> Option<Role> {
        Role::ALL.iter().copied().find(|r| r.as_str() == normalized)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize the free-form role spelling the backend sends into the
/// canonical form: uppercase, strip a `ROLE_` namespace prefix, then map
/// known historical synonyms. Unrecognized strings pass through unchanged
/// so the registry lookup fails closed instead of crashing the session.
pub fn normalize_role(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    let stripped = upper.strip_prefix("ROLE_").unwrap_or(&upper);

    match stripped {
        "GYMOWNER" | "OWNER" => "GYM_OWNER".to_string(),
        "PTTRAINER" => "TRAINER".to_string(),
        "PTMEMBER" => "PT_MEMBER".to_string(),
        other => other.to_string(),
    }
}

/// Fixed landing page per role, used by the guard when an authenticated
/// user hits a route outside their partition.
pub fn default_home_for(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::GymOwner => "/gym-owner",
        Role::Trainer => "/trainer",
        Role::Member | Role::PtMember => "/member",
    }
}
