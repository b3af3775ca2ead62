//! Command-line front end: writes plugin CSS or token JSON for a build step,
//! and manages a file-backed theme preference.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tailwind_config_utils::{
    all_plugins, render, token_group, token_groups, ClassList, FileStore, OsPreference, Plugin,
    SystemPreference, ThemePreference, ThemeToggle,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "twcu", version, about = "Tailwind CSS v4 config utilities")]
struct Cli {
    /// Write output to FILE instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a plugin's CSS (theme, dark-mode, breakpoints, utilities or all)
    Plugin {
        #[arg(default_value = "all")]
        name: String,
    },
    /// Print design tokens as JSON
    Tokens {
        /// Only this group (semantic-colors, fluid-typography, spacing, border-radius, shadows)
        #[arg(short, long)]
        group: Option<String>,
    },
    /// Inspect or change a persisted theme preference
    Scheme {
        /// Preference file (JSON)
        #[arg(short, long, value_name = "FILE")]
        store: PathBuf,

        #[command(subcommand)]
        action: Option<SchemeAction>,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum SchemeAction {
    /// Store light, dark, or clear the preference with system
    Set { preference: ThemePreference },
    /// Flip between light and dark
    Toggle,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let text = run(cli.command)?;

    match cli.output {
        Some(path) => fs::write(&path, text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", text),
    }
    Ok(())
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Plugin { name } if name == "all" => Ok(all_plugins()?),
        Command::Plugin { name } => {
            let plugin: Plugin = name.parse()?;
            Ok(render::render(plugin)?)
        }
        Command::Tokens { group: Some(group) } => {
            Ok(serde_json::to_string_pretty(&token_group(&group)?)?)
        }
        Command::Tokens { group: None } => Ok(serde_json::to_string_pretty(&token_groups())?),
        Command::Scheme { store, action } => Ok(scheme(store, action, OsPreference)),
    }
}

/// Runs the controller over a preference file and describes the result.
fn scheme<P: SystemPreference>(store: PathBuf, action: Option<SchemeAction>, signal: P) -> String {
    let mut toggle = ThemeToggle::new(FileStore::new(store), ClassList::new(), signal);
    toggle.init_theme();
    match action {
        Some(SchemeAction::Set { preference }) => toggle.set_theme(preference),
        Some(SchemeAction::Toggle) => {
            toggle.toggle();
        }
        None => {}
    }
    let mode = if toggle.is_dark() { "dark" } else { "light" };
    format!(
        "preference: {}\nactive: {}\nclass: \"{}\"",
        toggle.stored_preference(),
        mode,
        toggle.root()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailwind_config_utils::{FixedPreference, PreferenceStore};

    #[test]
    fn test_scheme_show_follows_system() {
        let dir = tempfile::tempdir().unwrap();
        let out = scheme(dir.path().join("prefs.json"), None, FixedPreference(true));
        assert_eq!(out, "preference: system\nactive: dark\nclass: \"dark\"");
    }

    #[test]
    fn test_scheme_set_and_toggle_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let set = Some(SchemeAction::Set {
            preference: ThemePreference::Dark,
        });
        let out = scheme(path.clone(), set, FixedPreference(false));
        assert_eq!(out, "preference: dark\nactive: dark\nclass: \"dark\"");
        assert_eq!(FileStore::new(&path).get("theme").as_deref(), Some("dark"));

        let out = scheme(path.clone(), Some(SchemeAction::Toggle), FixedPreference(false));
        assert_eq!(out, "preference: light\nactive: light\nclass: \"\"");
        assert_eq!(FileStore::new(&path).get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_scheme_set_system_clears_file_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        scheme(path.clone(), Some(SchemeAction::Toggle), FixedPreference(false));

        let set = Some(SchemeAction::Set {
            preference: ThemePreference::System,
        });
        let out = scheme(path.clone(), set, FixedPreference(false));
        assert_eq!(out, "preference: system\nactive: light\nclass: \"\"");
        assert_eq!(FileStore::new(&path).get("theme"), None);
    }

    #[test]
    fn test_run_tokens_group_json() {
        let out = run(Command::Tokens {
            group: Some("spacing".to_string()),
        })
        .unwrap();
        assert!(out.contains("\"--spacing-container\""));
    }

    #[test]
    fn test_run_unknown_plugin_errors() {
        let err = run(Command::Plugin {
            name: "grid".to_string(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("unknown plugin 'grid'"));
    }
}
