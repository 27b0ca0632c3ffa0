use serde::{Deserialize, Serialize};

/// Commercial tiers. Declaration order is the upgrade order used for
/// minimum-plan and upgrade-suggestion lookups; it is a total order by
/// capability, not by price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionPlan {
    HalfYearly,
    Starter,
    Professional,
    Enterprise,
}

/// Fixed upgrade order, lowest first.
pub const PLAN_ORDER: [SubscriptionPlan; 4] = [
    SubscriptionPlan::HalfYearly,
    SubscriptionPlan::Starter,
    SubscriptionPlan::Professional,
    SubscriptionPlan::Enterprise,
];

impl SubscriptionPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionPlan::HalfYearly => "HALFYEARLY",
            SubscriptionPlan::Starter => "STARTER",
            SubscriptionPlan::Professional => "PROFESSIONAL",
            SubscriptionPlan::Enterprise => "ENTERPRISE",
        }
    }

    /// Human label used in CLI output and upgrade prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionPlan::HalfYearly => "Half Yearly",
            SubscriptionPlan::Starter => "Starter",
            SubscriptionPlan::Professional => "Professional",
            SubscriptionPlan::Enterprise => "Enterprise",
        }
    }

    /// Strict parse of the canonical plan identifier. For free-form backend
    /// labels use `plan_from_subscription_name` instead.
    pub fn parse(code: &str) -> Option<SubscriptionPlan> {
        let wanted = code.trim().to_uppercase().replace(['-', '_', ' '], "");
        PLAN_ORDER.iter().copied().find(|p| p.as_str() == wanted)
    }

    /// Position in the fixed upgrade order.
    pub(crate) fn rank(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-plan count ceilings. Every current plan resolves to `Unlimited`;
/// the structure exists so tiered limits can be introduced without
/// changing call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Unlimited,
    Capped(u32),
}

impl Limit {
    pub fn is_reached(&self, count: u32) -> bool {
        match self {
            Limit::Unlimited => false,
            Limit::Capped(max) => count >= *max,
        }
    }
}

pub fn trainer_limit(_plan: SubscriptionPlan) -> Limit {
    Limit::Unlimited
}

pub fn package_limit(_plan: SubscriptionPlan) -> Limit {
    Limit::Unlimited
}

pub fn is_trainer_limit_reached(plan: SubscriptionPlan, count: u32) -> bool {
    trainer_limit(plan).is_reached(count)
}

pub fn is_package_limit_reached(plan: SubscriptionPlan, count: u32) -> bool {
    package_limit(plan).is_reached(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_matches_declared_order() {
        for (index, plan) in PLAN_ORDER.iter().enumerate() {
            assert_eq!(plan.rank(), index);
        }
    }

    #[test]
    fn test_parse_accepts_common_spellings() {
        assert_eq!(SubscriptionPlan::parse("HALFYEARLY"), Some(SubscriptionPlan::HalfYearly));
        assert_eq!(SubscriptionPlan::parse("half_yearly"), Some(SubscriptionPlan::HalfYearly));
        assert_eq!(SubscriptionPlan::parse("enterprise"), Some(SubscriptionPlan::Enterprise));
        assert_eq!(SubscriptionPlan::parse("platinum"), None);
    }

    #[test]
    fn test_limits_are_unlimited_for_every_plan() {
        for plan in PLAN_ORDER {
            assert_eq!(trainer_limit(plan), Limit::Unlimited);
            assert_eq!(package_limit(plan), Limit::Unlimited);
            assert!(!is_trainer_limit_reached(plan, u32::MAX));
            assert!(!is_package_limit_reached(plan, u32::MAX));
        }
    }

    #[test]
    fn test_capped_limit_sentinel_semantics() {
        assert!(!Limit::Capped(5).is_reached(4));
        assert!(Limit::Capped(5).is_reached(5));
        assert!(!Limit::Unlimited.is_reached(u32::MAX));
    }
}
