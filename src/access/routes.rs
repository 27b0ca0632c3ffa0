use once_cell::sync::Lazy;
use serde::Serialize;

use super::roles::Role;

/// A concrete navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLeaf {
    pub title: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

/// One entry in a role's navigation menu. Submenu vs leaf is a display
/// concern only; access evaluation always flattens to concrete paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavEntry {
    Leaf(NavLeaf),
    Submenu {
        title: &'static str,
        icon: &'static str,
        items: Vec<NavLeaf>,
    },
}

impl NavEntry {
    fn leaf(title: &'static str, path: &'static str, icon: &'static str) -> Self {
        NavEntry::Leaf(NavLeaf { title, path, icon })
    }

    /// Concrete paths this entry contributes, submenus flattened.
    pub fn paths(&self) -> Vec<&'static str> {
        match self {
            NavEntry::Leaf(leaf) => vec![leaf.path],
            NavEntry::Submenu { items, .. } => items.iter().map(|l| l.path).collect(),
        }
    }
}

static ADMIN_ROUTES: Lazy<Vec<NavEntry>> = Lazy::new(|| {
    vec![
        NavEntry::leaf("Dashboard", "/admin", "layout-dashboard"),
        NavEntry::leaf("Gyms", "/admin/gyms", "building"),
        NavEntry::leaf("Gym Owners", "/admin/gym-owners", "users"),
        NavEntry::leaf("Subscriptions", "/admin/subscriptions", "credit-card"),
        NavEntry::leaf("Payments", "/admin/payments", "banknote"),
        NavEntry::Submenu {
            title: "Settings",
            icon: "settings",
            items: vec![
                NavLeaf { title: "Profile", path: "/admin/settings/profile", icon: "user" },
                NavLeaf { title: "Platform", path: "/admin/settings/platform", icon: "sliders" },
            ],
        },
    ]
});

static GYM_OWNER_ROUTES: Lazy<Vec<NavEntry>> = Lazy::new(|| {
    vec![
        NavEntry::leaf("Dashboard", "/gym-owner", "layout-dashboard"),
        NavEntry::leaf("Members", "/gym-owner/members", "users"),
        NavEntry::leaf("Trainers", "/gym-owner/trainers", "dumbbell"),
        NavEntry::leaf("Packages", "/gym-owner/packages", "package"),
        NavEntry::Submenu {
            title: "Plans",
            icon: "clipboard-list",
            items: vec![
                NavLeaf { title: "Diet Plans", path: "/gym-owner/diet-plans", icon: "utensils" },
                NavLeaf { title: "Exercise Plans", path: "/gym-owner/exercise-plans", icon: "activity" },
            ],
        },
        NavEntry::leaf("Payments", "/gym-owner/payments", "banknote"),
        NavEntry::leaf("Reports", "/gym-owner/reports", "bar-chart"),
        NavEntry::Submenu {
            title: "Settings",
            icon: "settings",
            items: vec![
                NavLeaf { title: "Profile", path: "/gym-owner/settings/profile", icon: "user" },
                NavLeaf { title: "Subscription", path: "/gym-owner/settings/subscription", icon: "credit-card" },
            ],
        },
    ]
});

static TRAINER_ROUTES: Lazy<Vec<NavEntry>> = Lazy::new(|| {
    vec![
        NavEntry::leaf("Dashboard", "/trainer", "layout-dashboard"),
        NavEntry::leaf("My Members", "/trainer/members", "users"),
        NavEntry::leaf("Diet Plans", "/trainer/diet-plans", "utensils"),
        NavEntry::leaf("Exercise Plans", "/trainer/exercise-plans", "activity"),
        NavEntry::leaf("Schedule", "/trainer/schedule", "calendar"),
    ]
});

// Member and PT member are UI-equivalent partitions and share this table.
static MEMBER_ROUTES: Lazy<Vec<NavEntry>> = Lazy::new(|| {
    vec![
        NavEntry::leaf("Dashboard", "/member", "layout-dashboard"),
        NavEntry::leaf("Profile", "/member/profile", "user"),
        NavEntry::leaf("Diet Plan", "/member/diet-plan", "utensils"),
        NavEntry::leaf("Exercise Plan", "/member/exercise-plan", "activity"),
        NavEntry::leaf("Payments", "/member/payments", "banknote"),
        NavEntry::leaf("Attendance", "/member/attendance", "calendar-check"),
    ]
});

/// Ordered navigation entries for a role. Pure static lookup, no error path.
pub fn routes_for_role(role: Role) -> &'static [NavEntry] {
    match role {
        Role::Admin => &ADMIN_ROUTES,
        Role::GymOwner => &GYM_OWNER_ROUTES,
        Role::Trainer => &TRAINER_ROUTES,
        Role::Member | Role::PtMember => &MEMBER_ROUTES,
    }
}

/// Lookup by (normalized) role string. Unknown roles yield an empty list,
/// so guards degrade to "allow nothing" rather than crash.
pub fn routes_for_role_name(normalized: &str) -> &'static [NavEntry] {
    match Role::parse(normalized) {
        Some(role) => routes_for_role(role),
        None => &[],
    }
}

/// All concrete paths reachable by a role, submenus flattened.
pub fn paths_for_role(role: Role) -> Vec<&'static str> {
    routes_for_role(role).iter().flat_map(|entry| entry.paths()).collect()
}

/// Roles whose route table contains the given path. More than one element
/// only for the shared member pages.
pub fn allowed_roles_for_path(path: &str) -> Vec<Role> {
    Role::ALL
        .iter()
        .copied()
        .filter(|role| paths_for_role(*role).contains(&path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_paths_unique_within_each_role() {
        for role in Role::ALL {
            let paths = paths_for_role(role);
            let unique: BTreeSet<_> = paths.iter().collect();
            assert_eq!(paths.len(), unique.len(), "duplicate path in {role} table");
        }
    }

    #[test]
    fn test_paths_disjoint_across_partitions() {
        // Member / PT member are the one sanctioned overlap.
        let partitions = [Role::Admin, Role::GymOwner, Role::Trainer, Role::Member];
        for a in partitions {
            for b in partitions {
                if a == b {
                    continue;
                }
                let pa: BTreeSet<_> = paths_for_role(a).into_iter().collect();
                let pb: BTreeSet<_> = paths_for_role(b).into_iter().collect();
                assert!(pa.is_disjoint(&pb), "{a} and {b} share a path");
            }
        }
    }

    #[test]
    fn test_member_and_pt_member_share_pages() {
        assert_eq!(paths_for_role(Role::Member), paths_for_role(Role::PtMember));
    }

    #[test]
    fn test_every_default_home_is_registered() {
        for role in Role::ALL {
            let home = super::super::roles::default_home_for(role);
            assert!(paths_for_role(role).contains(&home), "{role} home {home} missing from its table");
        }
    }

    #[test]
    fn test_unknown_role_name_yields_empty_list() {
        assert!(routes_for_role_name("RECEPTIONIST").is_empty());
        assert!(!routes_for_role_name("GYM_OWNER").is_empty());
    }

    #[test]
    fn test_allowed_roles_for_shared_member_path() {
        let roles = allowed_roles_for_path("/member/diet-plan");
        assert_eq!(roles, vec![Role::Member, Role::PtMember]);
        assert_eq!(allowed_roles_for_path("/admin/gyms"), vec![Role::Admin]);
        assert!(allowed_roles_for_path("/nowhere").is_empty());
    }

    #[test]
    fn test_submenu_flattening() {
        let settings = ADMIN_ROUTES
            .iter()
            .find(|e| matches!(e, NavEntry::Submenu { title: "Settings", .. }))
            .map(|e| e.paths());
        assert_eq!(
            settings,
            Some(vec!["/admin/settings/profile", "/admin/settings/platform"])
        );
    }
}
