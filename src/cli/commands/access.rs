use serde_json::json;

use crate::access::{allowed_roles_for_path, evaluate, AccessDecision};
use crate::cli::utils::{open_session_store, print_json};
use crate::cli::OutputFormat;

/// Evaluate the access guard for a concrete path against the stored
/// session, exactly as the console would on navigation.
pub fn handle(path: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let store = open_session_store()?;
    let session = store.snapshot();

    let allowed = allowed_roles_for_path(path);
    let decision = evaluate(&session, &allowed, path);

    match output_format {
        OutputFormat::Json => print_json(&json!({
            "path": path,
            "allowed_roles": allowed,
            "decision": match &decision {
                AccessDecision::Render => json!("render"),
                AccessDecision::Pending => json!("pending"),
                AccessDecision::Redirect { to, return_to } => json!({
                    "redirect": to,
                    "return_to": return_to,
                }),
            },
        })),
        OutputFormat::Text => {
            match decision {
                AccessDecision::Render => println!("render"),
                AccessDecision::Pending => println!("pending (session still loading)"),
                AccessDecision::Redirect { to, return_to } => match return_to {
                    Some(original) => println!("redirect to {to} (returning to {original} after login)"),
                    None => println!("redirect to {to}"),
                },
            }
            Ok(())
        }
    }
}
