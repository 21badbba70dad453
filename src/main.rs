#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hydrate_reminder::config::{
    ConfigStore, HydrateReminderConfig, Setting, SettingKey, SettingKind, schema, validate,
};
use hydrate_reminder::constants::CONFIG_GROUP;

#[derive(Parser)]
#[command(name = "hydrate-reminder")]
#[command(version)]
#[command(about = "Inspect and edit Hydrate Reminder settings", long_about = None)]
struct Cli {
    /// Value store to read and write (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at info level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every setting grouped by section, in display order
    Schema {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print default values as JSON
    Defaults,
    /// Check a candidate value without touching the store
    Validate { key: String, value: String },
    /// Print the effective value of one setting
    Get { key: String },
    /// Print every effective value as JSON
    Show,
    /// Validate and persist a value
    Set { key: String, value: String },
    /// Drop a persisted value (or all of them) so the default applies again
    Reset { key: Option<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let default_level = if cli.verbose { "info" } else { "warn" };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let store_path = cli.config.unwrap_or_else(ConfigStore::path);

    match cli.command {
        Command::Schema { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&schema_json())?);
            } else {
                print_schema();
            }
        }
        Command::Defaults => {
            let defaults = HydrateReminderConfig::default();
            println!("{}", serde_json::to_string_pretty(&defaults)?);
        }
        Command::Validate { key, value } => {
            let parsed = validate(&key, &value)?;
            println!("{}", parsed.to_persisted());
        }
        Command::Get { key } => {
            let key = parse_key(&key)?;
            let store = ConfigStore::load_from(&store_path)?;
            println!("{}", store.get(key).to_persisted());
        }
        Command::Show => {
            let store = ConfigStore::load_from(&store_path)?;
            for unknown in store.unknown_keys() {
                tracing::warn!(key = unknown, "Store contains a key not in the schema");
            }
            let config = HydrateReminderConfig::from_store(&store);
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Set { key, value } => {
            let mut store = ConfigStore::load_from(&store_path)?;
            let parsed = store.set(&key, &value)?;
            store.save_to(&store_path)?;
            println!("{} = {}", key, parsed);
        }
        Command::Reset { key } => {
            let mut store = ConfigStore::load_from(&store_path)?;
            match key {
                Some(key) => {
                    let key = parse_key(&key)?;
                    if !store.reset(key) {
                        println!("{} already uses its default", key);
                        return Ok(());
                    }
                }
                None => store.reset_all(),
            }
            store.save_to(&store_path)?;
        }
    }

    Ok(())
}

fn parse_key(key: &str) -> Result<SettingKey> {
    SettingKey::from_key(key).with_context(|| format!("Unknown setting key '{}'", key))
}

fn print_schema() {
    println!("[{}]", CONFIG_GROUP);
    for setting in schema::settings_in(None) {
        print_setting(setting);
    }
    for section in schema::sections() {
        println!();
        println!("{} ({})", section.name(), section.description());
        for setting in schema::settings_in(Some(section)) {
            print_setting(setting);
        }
    }
}

fn print_setting(setting: &Setting) {
    println!(
        "  {:>2}  {:<45} {:<22} default: {}{}",
        setting.position,
        setting.key.as_str(),
        setting.label,
        setting.default,
        describe_kind(setting.kind)
    );
}

fn describe_kind(kind: SettingKind) -> String {
    match kind {
        SettingKind::Int { min, max, units } => {
            format!(" [{}..={}{}]", min, max, units.unwrap_or(""))
        }
        SettingKind::Color => " [#AARRGGBB]".to_string(),
        other => match other.variants() {
            Some(variants) => format!(" [{}]", variants.join(" | ")),
            None => String::new(),
        },
    }
}

fn schema_json() -> serde_json::Value {
    let setting_json = |setting: &Setting| {
        let mut entry = serde_json::json!({
            "key": setting.key.as_str(),
            "name": setting.label,
            "description": setting.description,
            "position": setting.position,
            "section": setting.section.map(|s| s.name()),
            "type": setting.kind.type_name(),
            "default": setting.default,
        });
        if let SettingKind::Int { min, max, units } = setting.kind {
            entry["range"] = serde_json::json!({ "min": min, "max": max });
            entry["units"] = serde_json::json!(units);
        }
        if setting.kind == SettingKind::Color {
            entry["alpha"] = serde_json::json!(true);
        }
        if let Some(variants) = setting.kind.variants() {
            entry["variants"] = serde_json::json!(variants);
        }
        entry
    };

    let sections: Vec<_> = schema::sections()
        .into_iter()
        .map(|section| {
            serde_json::json!({
                "name": section.name(),
                "description": section.description(),
                "position": section.position(),
            })
        })
        .collect();
    let settings: Vec<_> = schema::SETTINGS.iter().map(setting_json).collect();

    serde_json::json!({
        "group": CONFIG_GROUP,
        "sections": sections,
        "settings": settings,
    })
}
