use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::print_json;
use crate::cli::OutputFormat;
use crate::entitlements::{
    available_features, plan_at_or_above, plan_from_subscription_name, SubscriptionPlan,
};

#[derive(Subcommand)]
pub enum PlanCommands {
    #[command(about = "Resolve a free-form backend plan label to a canonical plan")]
    Resolve {
        #[arg(help = "Raw plan label, e.g. 'PROFESSIONAL - Most Popular (Gold)'")]
        name: String,
    },

    #[command(about = "Compare two plans in the upgrade order")]
    Compare {
        a: String,
        b: String,
    },
}

pub fn handle(cmd: PlanCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        PlanCommands::Resolve { name } => {
            let plan = plan_from_subscription_name(Some(&name));
            match output_format {
                OutputFormat::Json => print_json(&json!({
                    "input": name,
                    "plan": plan,
                    "features": available_features(plan).len(),
                })),
                OutputFormat::Text => {
                    println!("{}", plan.display_name());
                    Ok(())
                }
            }
        }
        PlanCommands::Compare { a, b } => {
            let plan_a = SubscriptionPlan::parse(&a)
                .ok_or_else(|| anyhow::anyhow!("unknown plan: {a}"))?;
            let plan_b = SubscriptionPlan::parse(&b)
                .ok_or_else(|| anyhow::anyhow!("unknown plan: {b}"))?;

            if plan_a == plan_b {
                println!("{} and {} are the same plan", plan_a.display_name(), plan_b.display_name());
            } else if plan_at_or_above(plan_a, plan_b) {
                println!("{} is above {}", plan_a.display_name(), plan_b.display_name());
            } else {
                println!("{} is below {}", plan_a.display_name(), plan_b.display_name());
            }
            Ok(())
        }
    }
}
