use crate::access::{normalize_role, routes_for_role_name, NavEntry};
use crate::cli::utils::print_json;
use crate::cli::OutputFormat;

pub fn handle(role: &str, flat: bool, output_format: OutputFormat) -> anyhow::Result<()> {
    // Accepts the same loose spellings the backend sends.
    let normalized = normalize_role(&role.replace('-', "_"));
    let entries = routes_for_role_name(&normalized);

    if entries.is_empty() {
        anyhow::bail!("unknown role: {role}");
    }

    if flat {
        let paths: Vec<&str> = entries.iter().flat_map(|e| e.paths()).collect();
        return match output_format {
            OutputFormat::Json => print_json(&paths),
            OutputFormat::Text => {
                for path in paths {
                    println!("{path}");
                }
                Ok(())
            }
        };
    }

    match output_format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Text => {
            for entry in entries {
                match entry {
                    NavEntry::Leaf(leaf) => println!("{:<20} {}", leaf.title, leaf.path),
                    NavEntry::Submenu { title, items, .. } => {
                        println!("{title}/");
                        for leaf in items {
                            println!("  {:<18} {}", leaf.title, leaf.path);
                        }
                    }
                }
            }
            Ok(())
        }
    }
}
