use clap::Subcommand;

use crate::cli::utils::{authed_client, open_session_store, print_json};
use crate::cli::OutputFormat;
use crate::services::{GymOwnerService, MemberService, TrainerService};

#[derive(Subcommand)]
pub enum GymCommands {
    #[command(about = "Show the gym dashboard summary")]
    Dashboard,

    #[command(about = "List members")]
    Members,

    #[command(about = "List trainers")]
    Trainers,

    #[command(about = "Show the gym's current subscription")]
    Subscription,
}

pub async fn handle(cmd: GymCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let store = open_session_store()?;
    let client = authed_client(&store)?;

    match cmd {
        GymCommands::Dashboard => {
            let summary = GymOwnerService::new(client).dashboard_summary().await?;
            match output_format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "total_members": summary.total_members,
                    "active_members": summary.active_members,
                    "total_trainers": summary.total_trainers,
                    "expiring_this_week": summary.expiring_this_week,
                })),
                OutputFormat::Text => {
                    println!("members:  {} ({} active)", summary.total_members, summary.active_members);
                    println!("trainers: {}", summary.total_trainers);
                    println!("expiring this week: {}", summary.expiring_this_week);
                    Ok(())
                }
            }
        }
        GymCommands::Members => {
            let members = MemberService::new(client).list().await?;
            match output_format {
                OutputFormat::Json => {
                    let rows: Vec<_> = members
                        .iter()
                        .map(|m| {
                            serde_json::json!({
                                "id": m.id,
                                "name": m.name,
                                "email": m.email,
                                "pt": m.is_pt_member,
                            })
                        })
                        .collect();
                    print_json(&rows)
                }
                OutputFormat::Text => {
                    for member in members {
                        let marker = if member.is_pt_member { " [PT]" } else { "" };
                        println!("{:<24} {}{}", member.name, member.email, marker);
                    }
                    Ok(())
                }
            }
        }
        GymCommands::Trainers => {
            let trainers = TrainerService::new(client).list().await?;
            match output_format {
                OutputFormat::Json => {
                    let rows: Vec<_> = trainers
                        .iter()
                        .map(|t| {
                            serde_json::json!({
                                "id": t.id,
                                "name": t.name,
                                "members": t.assigned_members,
                            })
                        })
                        .collect();
                    print_json(&rows)
                }
                OutputFormat::Text => {
                    for trainer in trainers {
                        println!("{:<24} {} members", trainer.name, trainer.assigned_members);
                    }
                    Ok(())
                }
            }
        }
        GymCommands::Subscription => {
            let info = GymOwnerService::new(client).current_subscription().await?;
            match output_format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "plan_name": info.plan_name,
                    "plan": info.plan(),
                    "status": info.status,
                    "expires_at": info.expires_at,
                })),
                OutputFormat::Text => {
                    println!("plan:   {} ({})", info.plan_name, info.plan().display_name());
                    println!("status: {}", info.status);
                    if let Some(expires) = info.expires_at {
                        println!("renews: {}", expires.format("%Y-%m-%d"));
                    }
                    Ok(())
                }
            }
        }
    }
}
