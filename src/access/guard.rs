use super::roles::{default_home_for, Role, LOGIN_PATH};
use crate::session::Session;

/// Outcome of evaluating a protected navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session is allowed; render the protected subtree.
    Render,
    /// Send the user elsewhere. `return_to` carries the originally
    /// attempted path so login can return the user afterward; it is only
    /// set on the unauthenticated branch.
    Redirect {
        to: String,
        return_to: Option<String>,
    },
    /// Storage rehydration has not finished; show a neutral loading state
    /// instead of flash-redirecting to login.
    Pending,
}

impl AccessDecision {
    fn login_redirect(attempted_path: &str) -> Self {
        AccessDecision::Redirect {
            to: LOGIN_PATH.to_string(),
            return_to: Some(attempted_path.to_string()),
        }
    }
}

/// Decide whether the current session may see a route guarded by
/// `allowed_roles`. Pure over the session snapshot; the only side effect
/// is a diagnostic log on the role-mismatch branch, which may indicate a
/// stale link or a privilege-escalation probe.
pub fn evaluate(session: &Session, allowed_roles: &[Role], attempted_path: &str) -> AccessDecision {
    if session.is_loading {
        return AccessDecision::Pending;
    }

    if !session.is_authenticated {
        return AccessDecision::login_redirect(attempted_path);
    }

    let attempted_role = session.user.as_ref().and_then(|u| u.resolved_role());
    match attempted_role {
        Some(role) if allowed_roles.contains(&role) => AccessDecision::Render,
        _ => {
            tracing::warn!(
                path = attempted_path,
                attempted_role = session.user.as_ref().map(|u| u.role.as_str()),
                required_roles = ?allowed_roles,
                "access denied, redirecting to role home"
            );
            let to = attempted_role.map(default_home_for).unwrap_or(LOGIN_PATH);
            AccessDecision::Redirect {
                to: to.to_string(),
                return_to: None,
            }
        }
    }
}

/// Guard for platform-admin routes.
pub fn admin_guard(session: &Session, attempted_path: &str) -> AccessDecision {
    evaluate(session, &[Role::Admin], attempted_path)
}

/// Guard for gym-owner routes.
pub fn gym_owner_guard(session: &Session, attempted_path: &str) -> AccessDecision {
    evaluate(session, &[Role::GymOwner], attempted_path)
}

/// Guard for trainer routes.
pub fn trainer_guard(session: &Session, attempted_path: &str) -> AccessDecision {
    evaluate(session, &[Role::Trainer], attempted_path)
}

/// Guard for member routes. Members and PT members are UI-equivalent, so
/// this is the only guard whose allow-list has more than one role.
pub fn member_guard(session: &Session, attempted_path: &str) -> AccessDecision {
    evaluate(session, &[Role::Member, Role::PtMember], attempted_path)
}
