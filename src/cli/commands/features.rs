use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::print_json;
use crate::cli::OutputFormat;
use crate::entitlements::{
    available_features, has_feature_access, minimum_plan_for, upgrade_suggestion, FeatureCode,
    SubscriptionPlan,
};

#[derive(Subcommand)]
pub enum FeatureCommands {
    #[command(about = "List every feature a plan unlocks")]
    List {
        #[arg(help = "Plan (halfyearly, starter, professional, enterprise)")]
        plan: String,
    },

    #[command(about = "Check whether a plan grants a feature")]
    Check {
        plan: String,
        #[arg(help = "Feature code, e.g. PT_ADD")]
        feature: String,
    },

    #[command(about = "Suggest the next plan that grants a feature")]
    Upgrade {
        plan: String,
        feature: String,
    },

    #[command(about = "Show the lowest plan that grants a feature")]
    Min { feature: String },
}

fn parse_plan(raw: &str) -> anyhow::Result<SubscriptionPlan> {
    SubscriptionPlan::parse(raw).ok_or_else(|| anyhow::anyhow!("unknown plan: {raw}"))
}

fn parse_feature(raw: &str) -> anyhow::Result<FeatureCode> {
    FeatureCode::parse(raw).ok_or_else(|| anyhow::anyhow!("unknown feature code: {raw}"))
}

pub fn handle(cmd: FeatureCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        FeatureCommands::List { plan } => {
            let plan = parse_plan(&plan)?;
            let features = available_features(plan);
            match output_format {
                OutputFormat::Json => print_json(&features),
                OutputFormat::Text => {
                    println!("{} ({} features)", plan.display_name(), features.len());
                    for feature in features {
                        println!("  {feature}");
                    }
                    Ok(())
                }
            }
        }
        FeatureCommands::Check { plan, feature } => {
            let plan = parse_plan(&plan)?;
            let feature = parse_feature(&feature)?;
            let granted = has_feature_access(plan, feature);
            match output_format {
                OutputFormat::Json => print_json(&json!({
                    "plan": plan,
                    "feature": feature,
                    "granted": granted,
                })),
                OutputFormat::Text => {
                    println!("{}", if granted { "granted" } else { "not granted" });
                    Ok(())
                }
            }
        }
        FeatureCommands::Upgrade { plan, feature } => {
            let plan = parse_plan(&plan)?;
            let feature = parse_feature(&feature)?;
            match upgrade_suggestion(plan, feature) {
                Some(suggested) => println!("upgrade to {}", suggested.display_name()),
                None if has_feature_access(plan, feature) => {
                    println!("already available on {}", plan.display_name())
                }
                None => println!("no plan grants {feature}"),
            }
            Ok(())
        }
        FeatureCommands::Min { feature } => {
            let feature = parse_feature(&feature)?;
            match minimum_plan_for(feature) {
                Some(plan) => println!("{}", plan.display_name()),
                None => anyhow::bail!("no plan grants {feature}"),
            }
            Ok(())
        }
    }
}
