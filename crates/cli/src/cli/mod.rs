pub mod config;
pub mod expr;
pub mod field;

use clap::{Parser, Subcommand};
use mc_domain::FieldName;

/// mccron — inspect and build cron expressions field by field.
#[derive(Debug, Parser)]
#[command(name = "mccron", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show which editing mode a single field value maps to.
    Classify {
        /// The field text, e.g. "*/5" or "1,3,5".
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Field the value belongs to (minute, hour, day_of_month, ...).
        #[arg(long, default_value = "minute")]
        field: FieldName,
        /// Output the mode as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Render a mode (as JSON) to canonical field text.
    Encode {
        /// e.g. '{"mode":"interval","start":0,"step":5}'.
        mode: String,
        /// Field the mode belongs to.
        #[arg(long, default_value = "minute")]
        field: FieldName,
    },
    /// Break an expression down field by field.
    Explain {
        /// A 5- or 6-field cron expression.
        expr: String,
    },
    /// Check every field of an expression against its bounds.
    Validate {
        /// A 5- or 6-field cron expression.
        expr: String,
    },
    /// Build an expression field by field, starting from all `*`.
    New {
        /// A field assignment such as `minute=*/15` or `dow=MON-FRI`.
        /// May be repeated.
        #[arg(long = "set", value_name = "FIELD=VALUE", allow_hyphen_values = true)]
        set: Vec<String>,
        /// Use the six-field layout instead of `schedule.layout`.
        #[arg(long)]
        seconds: bool,
    },
    /// List upcoming fire times of an expression.
    Next {
        /// A 5- or 6-field cron expression.
        expr: String,
        /// How many occurrences to list, 1 to 100 (defaults to
        /// `schedule.preview_count`).
        #[arg(long)]
        count: Option<usize>,
        /// IANA timezone (defaults to `schedule.timezone`).
        #[arg(long)]
        tz: Option<String>,
        /// Start searching after this RFC 3339 instant instead of now.
        #[arg(long)]
        after: Option<String>,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any issues.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `MCCRON_CONFIG` (or
/// `mccron.toml` by default). A missing file means all defaults.
/// Returns the parsed [`Config`] and the path that was used.
///
/// [`Config`]: mc_domain::config::Config
pub fn load_config() -> anyhow::Result<(mc_domain::config::Config, String)> {
    let config_path = std::env::var("MCCRON_CONFIG").unwrap_or_else(|_| "mccron.toml".into());
    let config = load_config_from(&config_path)?;
    Ok((config, config_path))
}

pub fn load_config_from(config_path: &str) -> anyhow::Result<mc_domain::config::Config> {
    let path = std::path::Path::new(config_path);
    if !path.exists() {
        tracing::debug!(config_path, "no config file, using defaults");
        return Ok(mc_domain::config::Config::default());
    }
    mc_domain::config::Config::load(path).map_err(|e| anyhow::anyhow!("loading {config_path}: {e}"))
}
