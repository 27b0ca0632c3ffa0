//! Role-based route access control: the role registry, per-role route
//! tables, and the access guard that decides render / redirect / pending
//! for every protected navigation.

pub mod guard;
pub mod roles;
pub mod routes;

pub use guard::{admin_guard, evaluate, gym_owner_guard, member_guard, trainer_guard, AccessDecision};
pub use roles::{default_home_for, normalize_role, Role, LOGIN_PATH};
pub use routes::{allowed_roles_for_path, paths_for_role, routes_for_role, routes_for_role_name, NavEntry, NavLeaf};
