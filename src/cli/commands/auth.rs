use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{authed_client, open_session_store, print_json, prompt};
use crate::cli::OutputFormat;
use crate::services::AuthService;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login to the backend and store the session")]
    Login {
        #[arg(help = "Account email")]
        email: String,
        #[arg(long, help = "Password (will prompt if not provided)")]
        password: Option<String>,
    },

    #[command(about = "Logout and clear the stored session")]
    Logout,

    #[command(about = "Show current authentication status")]
    Status,

    #[command(about = "Show the stored user profile")]
    Whoami,

    #[command(about = "Exchange the refresh token for a new access token")]
    Refresh,

    #[command(about = "Change the account password")]
    ChangePassword,
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { email, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Password")?,
            };

            let auth = AuthService::from_config()?;
            let response = auth.login(&email, &password).await?;

            let store = open_session_store()?;
            store.set_auth(response.user, response.access_token, response.refresh_token);

            let session = store.snapshot();
            let user = session.user.as_ref();
            match output_format {
                OutputFormat::Json => print_json(&json!({
                    "authenticated": true,
                    "user": user,
                })),
                OutputFormat::Text => {
                    println!(
                        "Logged in as {} ({})",
                        user.map(|u| u.name.as_str()).unwrap_or("?"),
                        user.map(|u| u.role.as_str()).unwrap_or("?")
                    );
                    Ok(())
                }
            }
        }
        AuthCommands::Logout => {
            let store = open_session_store()?;
            let session = store.snapshot();

            // Best effort server-side invalidation; the local session is
            // cleared either way.
            if let Some(refresh_token) = &session.refresh_token {
                let auth = AuthService::from_config()?;
                if let Err(e) = auth.logout(refresh_token).await {
                    tracing::warn!(error = %e, "server-side logout failed");
                }
            }

            store.logout();
            println!("Logged out");
            Ok(())
        }
        AuthCommands::Status => {
            let store = open_session_store()?;
            let session = store.snapshot();
            match output_format {
                OutputFormat::Json => print_json(&json!({
                    "authenticated": session.is_authenticated,
                    "role": session.user.as_ref().map(|u| u.role.as_str()),
                })),
                OutputFormat::Text => {
                    if session.is_authenticated {
                        println!(
                            "Authenticated as {}",
                            session.user.as_ref().map(|u| u.email.as_str()).unwrap_or("?")
                        );
                    } else {
                        println!("Not authenticated");
                    }
                    Ok(())
                }
            }
        }
        AuthCommands::Whoami => {
            let store = open_session_store()?;
            let session = store.snapshot();
            match session.user {
                Some(user) => match output_format {
                    OutputFormat::Json => print_json(&user),
                    OutputFormat::Text => {
                        println!("{} <{}>", user.name, user.email);
                        println!("role: {}", user.role);
                        println!("plan: {}", user.resolved_plan());
                        Ok(())
                    }
                },
                None => anyhow::bail!("not logged in"),
            }
        }
        AuthCommands::Refresh => {
            let store = open_session_store()?;
            let session = store.snapshot();
            let refresh_token = session
                .refresh_token
                .ok_or_else(|| anyhow::anyhow!("not logged in"))?;

            let auth = AuthService::from_config()?;
            let response = auth.refresh(&refresh_token).await?;
            store.set_access_token(response.access_token);
            println!("Access token refreshed");
            Ok(())
        }
        AuthCommands::ChangePassword => {
            let store = open_session_store()?;
            let client = authed_client(&store)?;

            let current = prompt("Current password")?;
            let new = prompt("New password")?;

            AuthService::new(client).change_password(&current, &new).await?;
            println!("Password changed");
            Ok(())
        }
    }
}
