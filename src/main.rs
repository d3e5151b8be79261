use clap::Parser;
use tracing_subscriber::EnvFilter;

use msacheck::application::config::AppConfig;
use msacheck::domain::value_objects::severity::Severity;
use msacheck::presentation::cli::app::Cli;
use msacheck::presentation::cli::commands::check::run_check;
use msacheck::presentation::cli::formatters::report_fmt::format_abort;

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    if let Some(ref path) = cli.config {
        AppConfig::load_from(path)
    } else {
        AppConfig::load()
    }
}

fn main() {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);
    colored::control::set_override(cli.color);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("configuration error: {e:#}");
            println!("{}", format_abort(Severity::Warning, &format!("{e:#}"), cli.color));
            std::process::exit(Severity::Warning.exit_code());
        }
    };

    let mut config = config.with_overrides(cli.thresholds.into(), cli.ignore.into());
    if cli.snapshot.is_some() {
        config.source.snapshot = cli.snapshot;
    }

    let code = run_check(cli.subcommand, &config, cli.color);
    std::process::exit(code);
}
