use clap::Parser;
use tracing_subscriber::EnvFilter;

use mc_cli::cli::{self, Cli, Command, ConfigCommand};

fn main() -> anyhow::Result<()> {
    init_cli_tracing();
    let args = Cli::parse();
    let (config, config_path) = cli::load_config()?;

    match args.command {
        Command::Classify { value, field, json } => {
            println!("{}", cli::field::classify_value(&config, field, &value, json)?);
        }
        Command::Encode { mode, field } => {
            println!("{}", cli::field::encode_mode(&config, field, &mode)?);
        }
        Command::Explain { expr } => {
            println!("{}", cli::expr::explain(&config, &expr)?);
        }
        Command::Validate { expr } => match cli::expr::validate(&config, &expr) {
            Ok(msg) => println!("{msg}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Command::New { set, seconds } => {
            println!("{}", cli::expr::build(&config, &set, seconds)?);
        }
        Command::Next {
            expr,
            count,
            tz,
            after,
        } => {
            let times = cli::expr::next(&config, &expr, count, tz.as_deref(), after.as_deref())?;
            if times.is_empty() {
                eprintln!("no occurrence within the next year");
                std::process::exit(1);
            }
            for line in times {
                println!("{line}");
            }
        }
        Command::Config(ConfigCommand::Validate) => {
            let report = cli::config::check(&config, &config_path);
            print!("{}", report.render());
            if report.has_errors() {
                std::process::exit(1);
            }
        }
        Command::Config(ConfigCommand::Show) => {
            print!("{}", cli::config::show(&config)?);
        }
    }
    Ok(())
}

/// Initialize compact stderr-only tracing.
///
/// Defaults to `warn` level so diagnostic output does not pollute stdout.
fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
