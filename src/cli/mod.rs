pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "gymctl")]
#[command(about = "Gym Console CLI - operator interface for the gym management backend")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Authentication and session management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Show the route table for a role")]
    Routes {
        #[arg(help = "Role name (admin, gym-owner, trainer, member, pt-member)")]
        role: String,

        #[arg(long, help = "Flatten submenus to a plain path list")]
        flat: bool,
    },

    #[command(about = "Feature entitlement queries")]
    Features {
        #[command(subcommand)]
        cmd: commands::features::FeatureCommands,
    },

    #[command(about = "Subscription plan queries")]
    Plan {
        #[command(subcommand)]
        cmd: commands::plan::PlanCommands,
    },

    #[command(about = "Evaluate the access guard for a path with the stored session")]
    Access {
        #[arg(help = "Route path, e.g. /admin/gyms")]
        path: String,
    },

    #[command(about = "Gym data fetched from the backend")]
    Gym {
        #[command(subcommand)]
        cmd: commands::gym::GymCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
        Commands::Routes { role, flat } => commands::routes::handle(&role, flat, output_format),
        Commands::Features { cmd } => commands::features::handle(cmd, output_format),
        Commands::Plan { cmd } => commands::plan::handle(cmd, output_format),
        Commands::Access { path } => commands::access::handle(&path, output_format),
        Commands::Gym { cmd } => commands::gym::handle(cmd, output_format).await,
    }
}
