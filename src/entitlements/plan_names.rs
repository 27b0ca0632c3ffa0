use super::plans::SubscriptionPlan;

/// Exact backend plan labels seen in production data, mapped to canonical
/// plans. The backend has renamed its offerings several times; this table
/// absorbs the drift.
const PLAN_NAME_MAPPING: &[(&str, SubscriptionPlan)] = &[
    ("HALF YEARLY", SubscriptionPlan::HalfYearly),
    ("HALFYEARLY", SubscriptionPlan::HalfYearly),
    ("Half Yearly Plan", SubscriptionPlan::HalfYearly),
    ("Small Gym Plan", SubscriptionPlan::HalfYearly),
    ("SMALL GYM - Half Yearly", SubscriptionPlan::HalfYearly),
    ("STARTER", SubscriptionPlan::Starter),
    ("Starter Plan", SubscriptionPlan::Starter),
    ("Basic", SubscriptionPlan::Starter),
    ("PROFESSIONAL", SubscriptionPlan::Professional),
    ("Professional Plan", SubscriptionPlan::Professional),
    ("PROFESSIONAL - Most Popular", SubscriptionPlan::Professional),
    ("Most Popular", SubscriptionPlan::Professional),
    ("ENTERPRISE", SubscriptionPlan::Enterprise),
    ("Enterprise Plan", SubscriptionPlan::Enterprise),
    ("Premium", SubscriptionPlan::Enterprise),
];

/// Resolve a free-form backend plan label to a canonical plan. Exact match
/// first, then case-insensitive substring matching in a fixed priority
/// order so labels carrying several markers resolve once. Never fails:
/// empty, absent, or unrecognized labels fall back to `Starter`, the most
/// restrictive paid tier, so backend label drift can never accidentally
/// grant premium features.
pub fn plan_from_subscription_name(raw_name: Option<&str>) -> SubscriptionPlan {
    let name = match raw_name {
        Some(name) if !name.trim().is_empty() => name.trim(),
        _ => return SubscriptionPlan::Starter,
    };

    if let Some((_, plan)) = PLAN_NAME_MAPPING.iter().find(|(label, _)| *label == name) {
        return *plan;
    }

    let lower = name.to_lowercase();
    if lower.contains("half yearly") || lower.contains("halfyearly") || lower.contains("small gym") {
        SubscriptionPlan::HalfYearly
    } else if lower.contains("enterprise") {
        SubscriptionPlan::Enterprise
    } else if lower.contains("professional") || lower.contains("most popular") {
        SubscriptionPlan::Professional
    } else {
        // "starter" labels and everything unrecognized both land here.
        SubscriptionPlan::Starter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_labels_resolve() {
        for (label, plan) in PLAN_NAME_MAPPING {
            assert_eq!(plan_from_subscription_name(Some(label)), *plan, "label {label:?}");
        }
    }

    #[test]
    fn test_decorated_label_falls_through_to_substring_match() {
        assert_eq!(
            plan_from_subscription_name(Some("PROFESSIONAL - Most Popular (Gold)")),
            SubscriptionPlan::Professional
        );
        assert_eq!(
            plan_from_subscription_name(Some("Enterprise (Annual, 20% off)")),
            SubscriptionPlan::Enterprise
        );
    }

    #[test]
    fn test_priority_order_resolves_mixed_labels_once() {
        // Carries both the small-gym and professional markers; the
        // half-yearly group wins because it is evaluated first.
        assert_eq!(
            plan_from_subscription_name(Some("Small Gym Professional Deal")),
            SubscriptionPlan::HalfYearly
        );
        // Professional and Most Popular in one label hit a single branch.
        assert_eq!(
            plan_from_subscription_name(Some("professional - most popular")),
            SubscriptionPlan::Professional
        );
    }

    #[test]
    fn test_fallbacks_are_starter() {
        assert_eq!(plan_from_subscription_name(None), SubscriptionPlan::Starter);
        assert_eq!(plan_from_subscription_name(Some("")), SubscriptionPlan::Starter);
        assert_eq!(plan_from_subscription_name(Some("   ")), SubscriptionPlan::Starter);
        assert_eq!(
            plan_from_subscription_name(Some("Some Unknown Plan")),
            SubscriptionPlan::Starter
        );
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        assert_eq!(
            plan_from_subscription_name(Some("half yearly special")),
            SubscriptionPlan::HalfYearly
        );
        assert_eq!(
            plan_from_subscription_name(Some("ENTERPRISE gym bundle")),
            SubscriptionPlan::Enterprise
        );
    }
}
