use std::fmt::Write;

use mc_domain::config::{Config, ConfigIssue, ConfigSeverity};

/// Outcome of `mccron config validate` for one config file.
#[derive(Debug)]
pub struct ConfigReport {
    pub path: String,
    pub issues: Vec<ConfigIssue>,
}

impl ConfigReport {
    pub fn errors(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == ConfigSeverity::Error)
            .count()
    }

    pub fn warnings(&self) -> usize {
        self.issues.len() - self.errors()
    }

    pub fn has_errors(&self) -> bool {
        self.errors() > 0
    }

    /// Issues one per line, then a summary line naming the file.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for issue in &self.issues {
            let _ = writeln!(out, "{issue}");
        }
        if self.issues.is_empty() {
            let _ = writeln!(out, "{}: ok", self.path);
        } else {
            let _ = writeln!(
                out,
                "{}: {} error(s), {} warning(s)",
                self.path,
                self.errors(),
                self.warnings()
            );
        }
        out
    }
}

pub fn check(config: &Config, config_path: &str) -> ConfigReport {
    ConfigReport {
        path: config_path.to_owned(),
        issues: config.validate(),
    }
}

/// Render the resolved config (with all defaults filled in) as TOML.
pub fn show(config: &Config) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
