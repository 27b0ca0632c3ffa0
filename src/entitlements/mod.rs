//! Subscription-plan feature gating: which capabilities each commercial
//! tier unlocks, plus the reverse lookups (minimum plan for a feature,
//! upgrade suggestion, plan comparison). Role access decides where a user
//! can go; this table decides what they can do once there.

pub mod features;
pub mod plan_names;
pub mod plans;

pub use features::FeatureCode;
pub use plan_names::plan_from_subscription_name;
pub use plans::{
    is_package_limit_reached, is_trainer_limit_reached, package_limit, trainer_limit, Limit,
    SubscriptionPlan, PLAN_ORDER,
};

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;

use features::FeatureCode as F;

// Feature sets are built as strict supersets up the tier ladder: each tier
// owns everything below it plus its own additions.

const HALF_YEARLY_FEATURES: &[FeatureCode] = &[
    F::Dashboard,
    F::MemberList,
    F::MemberAdd,
    F::MemberEdit,
    F::MemberProfile,
    F::MemberAttendance,
    F::TrainerList,
    F::CoursePackages,
    F::Payments,
    F::PaymentRecord,
    F::ExpiryAlerts,
];

const STARTER_ADDITIONS: &[FeatureCode] = &[
    F::MemberDelete,
    F::TrainerAdd,
    F::TrainerEdit,
    F::TrainerSchedule,
    F::PackageAdd,
    F::PackageEdit,
    F::PaymentReminders,
    F::ReportsBasic,
    F::EmailNotifications,
    F::BirthdayGreetings,
];

const PROFESSIONAL_ADDITIONS: &[FeatureCode] = &[
    F::TrainerDelete,
    F::PackageDelete,
    F::AttendanceQr,
    F::BulkImport,
    F::PtAdd,
    F::PtSessions,
    F::PtMemberAssign,
    F::DietPlans,
    F::DietPlanAssign,
    F::ExercisePlans,
    F::ExercisePlanAssign,
    F::PaymentReports,
    F::InvoiceDownload,
    F::ExportMembers,
    F::ExportPayments,
    F::ExportAttendance,
    F::ReportsAdvanced,
    F::MemberGrowthAnalytics,
    F::WhatsappNotifications,
    F::SmsNotifications,
];

const ENTERPRISE_ADDITIONS: &[FeatureCode] = &[
    F::DietPlanTemplates,
    F::ExercisePlanTemplates,
    F::RevenueAnalytics,
    F::MultiBranch,
    F::StaffAccounts,
    F::CustomBranding,
    F::PrioritySupport,
    F::ApiAccess,
    F::AuditLog,
];

static PLAN_FEATURES: Lazy<BTreeMap<SubscriptionPlan, BTreeSet<FeatureCode>>> = Lazy::new(|| {
    let half_yearly: BTreeSet<FeatureCode> = HALF_YEARLY_FEATURES.iter().copied().collect();
    let starter: BTreeSet<FeatureCode> = half_yearly
        .iter()
        .copied()
        .chain(STARTER_ADDITIONS.iter().copied())
        .collect();
    let professional: BTreeSet<FeatureCode> = starter
        .iter()
        .copied()
        .chain(PROFESSIONAL_ADDITIONS.iter().copied())
        .collect();
    let enterprise: BTreeSet<FeatureCode> = professional
        .iter()
        .copied()
        .chain(ENTERPRISE_ADDITIONS.iter().copied())
        .collect();

    BTreeMap::from([
        (SubscriptionPlan::HalfYearly, half_yearly),
        (SubscriptionPlan::Starter, starter),
        (SubscriptionPlan::Professional, professional),
        (SubscriptionPlan::Enterprise, enterprise),
    ])
});

static NO_FEATURES: Lazy<BTreeSet<FeatureCode>> = Lazy::new(BTreeSet::new);

/// Full feature set a plan unlocks.
pub fn available_features(plan: SubscriptionPlan) -> &'static BTreeSet<FeatureCode> {
    PLAN_FEATURES.get(&plan).unwrap_or(&NO_FEATURES)
}

/// Set-membership test. Fail-closed: a plan outside the table would only
/// hide paid features, never expose them.
pub fn has_feature_access(plan: SubscriptionPlan, feature: FeatureCode) -> bool {
    available_features(plan).contains(&feature)
}

/// Lowest plan in the upgrade order that grants the feature. `None` means
/// no plan grants it, which is a table configuration error to catch in
/// tests rather than at runtime.
pub fn minimum_plan_for(feature: FeatureCode) -> Option<SubscriptionPlan> {
    PLAN_ORDER.iter().copied().find(|plan| has_feature_access(*plan, feature))
}

/// First strictly-higher plan that grants the feature, or `None` if the
/// current plan already has it covered by being at or above every granting
/// plan, or if nothing grants it.
pub fn upgrade_suggestion(current: SubscriptionPlan, feature: FeatureCode) -> Option<SubscriptionPlan> {
    PLAN_ORDER
        .iter()
        .copied()
        .filter(|plan| plan.rank() > current.rank())
        .find(|plan| has_feature_access(*plan, feature))
}

/// Total-order comparison in the fixed upgrade order.
pub fn plan_at_or_above(plan: SubscriptionPlan, baseline: SubscriptionPlan) -> bool {
    plan.rank() >= baseline.rank()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_agrees_with_available_features() {
        for plan in PLAN_ORDER {
            let set = available_features(plan);
            for feature in FeatureCode::ALL {
                assert_eq!(has_feature_access(plan, *feature), set.contains(feature));
            }
        }
    }

    #[test]
    fn test_tiers_are_strict_supersets() {
        for pair in PLAN_ORDER.windows(2) {
            let lower = available_features(pair[0]);
            let higher = available_features(pair[1]);
            assert!(lower.is_subset(higher), "{} must be a subset of {}", pair[0], pair[1]);
            assert!(lower.len() < higher.len(), "{} must add features over {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_baseline_features_in_every_plan() {
        for plan in PLAN_ORDER {
            assert!(has_feature_access(plan, FeatureCode::Dashboard));
            assert!(has_feature_access(plan, FeatureCode::MemberList));
        }
    }

    #[test]
    fn test_pt_add_is_professional_and_up() {
        assert!(!has_feature_access(SubscriptionPlan::HalfYearly, FeatureCode::PtAdd));
        assert!(!has_feature_access(SubscriptionPlan::Starter, FeatureCode::PtAdd));
        assert!(has_feature_access(SubscriptionPlan::Professional, FeatureCode::PtAdd));
        assert!(has_feature_access(SubscriptionPlan::Enterprise, FeatureCode::PtAdd));
    }

    #[test]
    fn test_every_feature_is_granted_somewhere() {
        for feature in FeatureCode::ALL {
            assert!(
                minimum_plan_for(*feature).is_some(),
                "{feature} is not granted by any plan"
            );
        }
    }

    #[test]
    fn test_minimum_plan_lookups() {
        assert_eq!(minimum_plan_for(FeatureCode::Dashboard), Some(SubscriptionPlan::HalfYearly));
        assert_eq!(minimum_plan_for(FeatureCode::ReportsBasic), Some(SubscriptionPlan::Starter));
        assert_eq!(minimum_plan_for(FeatureCode::PtAdd), Some(SubscriptionPlan::Professional));
        assert_eq!(minimum_plan_for(FeatureCode::MultiBranch), Some(SubscriptionPlan::Enterprise));
    }

    #[test]
    fn test_upgrade_suggestions() {
        assert_eq!(
            upgrade_suggestion(SubscriptionPlan::Starter, FeatureCode::PtAdd),
            Some(SubscriptionPlan::Professional)
        );
        assert_eq!(
            upgrade_suggestion(SubscriptionPlan::HalfYearly, FeatureCode::AuditLog),
            Some(SubscriptionPlan::Enterprise)
        );
        // Already granted at the current tier still points at the next
        // granting tier only if strictly higher plans grant it; Dashboard
        // is everywhere, so the suggestion is the next tier up.
        assert_eq!(
            upgrade_suggestion(SubscriptionPlan::Professional, FeatureCode::Dashboard),
            Some(SubscriptionPlan::Enterprise)
        );
    }

    #[test]
    fn test_no_upgrade_above_enterprise() {
        for feature in FeatureCode::ALL {
            assert_eq!(upgrade_suggestion(SubscriptionPlan::Enterprise, *feature), None);
        }
    }

    #[test]
    fn test_plan_ordering() {
        assert!(plan_at_or_above(SubscriptionPlan::Enterprise, SubscriptionPlan::Starter));
        assert!(!plan_at_or_above(SubscriptionPlan::Starter, SubscriptionPlan::Enterprise));
        assert!(!plan_at_or_above(SubscriptionPlan::HalfYearly, SubscriptionPlan::Starter));
        for plan in PLAN_ORDER {
            assert!(plan_at_or_above(plan, plan));
        }
    }
}
