use serde::{Deserialize, Serialize};

/// Symbolic identifiers for every plan-gated capability in the console.
/// Source order groups related affordances for documentation purposes only;
/// access checks are pure set membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureCode {
    // Core
    Dashboard,
    // Members
    MemberList,
    MemberAdd,
    MemberEdit,
    MemberDelete,
    MemberProfile,
    MemberAttendance,
    AttendanceQr,
    BulkImport,
    // Trainers
    TrainerList,
    TrainerAdd,
    TrainerEdit,
    TrainerDelete,
    TrainerSchedule,
    // Personal training
    PtAdd,
    PtSessions,
    PtMemberAssign,
    // Diet / exercise plans
    DietPlans,
    DietPlanAssign,
    DietPlanTemplates,
    ExercisePlans,
    ExercisePlanAssign,
    ExercisePlanTemplates,
    // Course packages
    CoursePackages,
    PackageAdd,
    PackageEdit,
    PackageDelete,
    // Payments
    Payments,
    PaymentRecord,
    PaymentReminders,
    PaymentReports,
    InvoiceDownload,
    // Exports
    ExportMembers,
    ExportPayments,
    ExportAttendance,
    // Reports and analytics
    ReportsBasic,
    ReportsAdvanced,
    RevenueAnalytics,
    MemberGrowthAnalytics,
    // Notifications
    WhatsappNotifications,
    SmsNotifications,
    EmailNotifications,
    ExpiryAlerts,
    BirthdayGreetings,
    // Organization
    MultiBranch,
    StaffAccounts,
    CustomBranding,
    PrioritySupport,
    ApiAccess,
    AuditLog,
}

impl FeatureCode {
    pub const ALL: &'static [FeatureCode] = &[
        FeatureCode::Dashboard,
        FeatureCode::MemberList,
        FeatureCode::MemberAdd,
        FeatureCode::MemberEdit,
        FeatureCode::MemberDelete,
        FeatureCode::MemberProfile,
        FeatureCode::MemberAttendance,
        FeatureCode::AttendanceQr,
        FeatureCode::BulkImport,
        FeatureCode::TrainerList,
        FeatureCode::TrainerAdd,
        FeatureCode::TrainerEdit,
        FeatureCode::TrainerDelete,
        FeatureCode::TrainerSchedule,
        FeatureCode::PtAdd,
        FeatureCode::PtSessions,
        FeatureCode::PtMemberAssign,
        FeatureCode::DietPlans,
        FeatureCode::DietPlanAssign,
        FeatureCode::DietPlanTemplates,
        FeatureCode::ExercisePlans,
        FeatureCode::ExercisePlanAssign,
        FeatureCode::ExercisePlanTemplates,
        FeatureCode::CoursePackages,
        FeatureCode::PackageAdd,
        FeatureCode::PackageEdit,
        FeatureCode::PackageDelete,
        FeatureCode::Payments,
        FeatureCode::PaymentRecord,
        FeatureCode::PaymentReminders,
        FeatureCode::PaymentReports,
        FeatureCode::InvoiceDownload,
        FeatureCode::ExportMembers,
        FeatureCode::ExportPayments,
        FeatureCode::ExportAttendance,
        FeatureCode::ReportsBasic,
        FeatureCode::ReportsAdvanced,
        FeatureCode::RevenueAnalytics,
        FeatureCode::MemberGrowthAnalytics,
        FeatureCode::WhatsappNotifications,
        FeatureCode::SmsNotifications,
        FeatureCode::EmailNotifications,
        FeatureCode::ExpiryAlerts,
        FeatureCode::BirthdayGreetings,
        FeatureCode::MultiBranch,
        FeatureCode::StaffAccounts,
        FeatureCode::CustomBranding,
        FeatureCode::PrioritySupport,
        FeatureCode::ApiAccess,
        FeatureCode::AuditLog,
    ];

    /// Stable identifier string, matching the serde wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureCode::Dashboard => "DASHBOARD",
            FeatureCode::MemberList => "MEMBER_LIST",
            FeatureCode::MemberAdd => "MEMBER_ADD",
            FeatureCode::MemberEdit => "MEMBER_EDIT",
            FeatureCode::MemberDelete => "MEMBER_DELETE",
            FeatureCode::MemberProfile => "MEMBER_PROFILE",
            FeatureCode::MemberAttendance => "MEMBER_ATTENDANCE",
            FeatureCode::AttendanceQr => "ATTENDANCE_QR",
            FeatureCode::BulkImport => "BULK_IMPORT",
            FeatureCode::TrainerList => "TRAINER_LIST",
            FeatureCode::TrainerAdd => "TRAINER_ADD",
            FeatureCode::TrainerEdit => "TRAINER_EDIT",
            FeatureCode::TrainerDelete => "TRAINER_DELETE",
            FeatureCode::TrainerSchedule => "TRAINER_SCHEDULE",
            FeatureCode::PtAdd => "PT_ADD",
            FeatureCode::PtSessions => "PT_SESSIONS",
            FeatureCode::PtMemberAssign => "PT_MEMBER_ASSIGN",
            FeatureCode::DietPlans => "DIET_PLANS",
            FeatureCode::DietPlanAssign => "DIET_PLAN_ASSIGN",
            FeatureCode::DietPlanTemplates => "DIET_PLAN_TEMPLATES",
            FeatureCode::ExercisePlans => "EXERCISE_PLANS",
            FeatureCode::ExercisePlanAssign => "EXERCISE_PLAN_ASSIGN",
            FeatureCode::ExercisePlanTemplates => "EXERCISE_PLAN_TEMPLATES",
            FeatureCode::CoursePackages => "COURSE_PACKAGES",
            FeatureCode::PackageAdd => "PACKAGE_ADD",
            FeatureCode::PackageEdit => "PACKAGE_EDIT",
            FeatureCode::PackageDelete => "PACKAGE_DELETE",
            FeatureCode::Payments => "PAYMENTS",
            FeatureCode::PaymentRecord => "PAYMENT_RECORD",
            FeatureCode::PaymentReminders => "PAYMENT_REMINDERS",
            FeatureCode::PaymentReports => "PAYMENT_REPORTS",
            FeatureCode::InvoiceDownload => "INVOICE_DOWNLOAD",
            FeatureCode::ExportMembers => "EXPORT_MEMBERS",
            FeatureCode::ExportPayments => "EXPORT_PAYMENTS",
            FeatureCode::ExportAttendance => "EXPORT_ATTENDANCE",
            FeatureCode::ReportsBasic => "REPORTS_BASIC",
            FeatureCode::ReportsAdvanced => "REPORTS_ADVANCED",
            FeatureCode::RevenueAnalytics => "REVENUE_ANALYTICS",
            FeatureCode::MemberGrowthAnalytics => "MEMBER_GROWTH_ANALYTICS",
            FeatureCode::WhatsappNotifications => "WHATSAPP_NOTIFICATIONS",
            FeatureCode::SmsNotifications => "SMS_NOTIFICATIONS",
            FeatureCode::EmailNotifications => "EMAIL_NOTIFICATIONS",
            FeatureCode::ExpiryAlerts => "EXPIRY_ALERTS",
            FeatureCode::BirthdayGreetings => "BIRTHDAY_GREETINGS",
            FeatureCode::MultiBranch => "MULTI_BRANCH",
            FeatureCode::StaffAccounts => "STAFF_ACCOUNTS",
            FeatureCode::CustomBranding => "CUSTOM_BRANDING",
            FeatureCode::PrioritySupport => "PRIORITY_SUPPORT",
            FeatureCode::ApiAccess => "API_ACCESS",
            FeatureCode::AuditLog => "AUDIT_LOG",
        }
    }

    /// Parse a symbolic code string, e.g. from the CLI.
    pub fn parse(code: &str) -> Option<FeatureCode> {
        let wanted = code.trim().to_uppercase();
        FeatureCode::ALL.iter().copied().find(|f| f.as_str() == wanted)
    }
}

impl std::fmt::Display for FeatureCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_all_is_exhaustive_and_unique() {
        let unique: BTreeSet<_> = FeatureCode::ALL.iter().collect();
        assert_eq!(unique.len(), FeatureCode::ALL.len());
    }

    #[test]
    fn test_parse_round_trips() {
        for feature in FeatureCode::ALL {
            assert_eq!(FeatureCode::parse(feature.as_str()), Some(*feature));
        }
        assert_eq!(FeatureCode::parse("pt_add"), Some(FeatureCode::PtAdd));
        assert_eq!(FeatureCode::parse("NOT_A_FEATURE"), None);
    }

    #[test]
    fn test_as_str_matches_serde_form() {
        let json = serde_json::to_string(&FeatureCode::PtAdd).unwrap();
        assert_eq!(json, "\"PT_ADD\"");
        assert_eq!(FeatureCode::PtAdd.as_str(), "PT_ADD");
    }
}
