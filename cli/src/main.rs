//! CLI entrypoint for query-form
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use query_form_application::{QueryFormController, SubmitOutcome};
use query_form_infrastructure::{ConfigLoader, FileConfig, HttpQueryGateway};
use query_form_presentation::{
    Cli, OutputConfig, QueryRepl, ReplConfig, TerminalForm, TerminalHost,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting query-form");

    // === Dependency Injection ===
    let gateway = Arc::new(HttpQueryGateway::from_config(&config.http)?);
    let endpoint = gateway.url().to_string();

    let form = Arc::new(TerminalForm::new(OutputConfig {
        format: config.output.format,
        show_progress: config.output.show_progress,
    }));
    let host = TerminalHost::new(Arc::clone(&form));

    let Some(controller) = QueryFormController::initialize(&host, gateway, config.form_config())
    else {
        return Ok(ExitCode::SUCCESS);
    };

    // Interactive mode
    if cli.interactive {
        let repl = QueryRepl::new(Arc::new(controller), form, endpoint).with_config(ReplConfig {
            history_file: config.repl.history_file.clone(),
        });
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single question mode - question is required
    let Some(question) = cli.question else {
        bail!("Question is required. Use --interactive for interactive mode.");
    };

    form.set_question(question);
    let outcome = controller.handle_submit().await;

    Ok(exit_code(&outcome))
}

/// Command-line flags win over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(server) = &cli.server {
        config.http.base_url = server.clone();
    }
    if let Some(endpoint) = &cli.endpoint {
        config.http.endpoint = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.http.timeout_seconds = Some(timeout);
    }
    if let Some(policy) = cli.policy {
        config.form.policy = policy.into();
    }
    if let Some(output) = cli.output {
        config.output.format = output.into();
    }
    if cli.quiet {
        config.output.show_progress = false;
    }
    if cli.no_color {
        config.output.color = false;
    }
    if let Some(path) = &cli.log_file {
        config.logging.file = Some(path.clone());
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` takes precedence.
///
/// Logs go to stderr so stdout only carries the result region. With a log
/// file, the returned guard must be held until exit to flush it.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let Some(path) = log_file else {
        builder.with_writer(std::io::stderr).init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    builder.with_writer(writer).with_ansi(false).init();
    Ok(Some(guard))
}

/// 0 on success, 1 when the region shows an error, 2 when the question was
/// rejected
fn exit_code(outcome: &SubmitOutcome) -> ExitCode {
    match outcome {
        SubmitOutcome::Rejected => ExitCode::from(2),
        outcome if outcome.is_error() => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_form_domain::{OutputFormat, QueryResult, ResultView, SubmitPolicy};
    use std::path::PathBuf;

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["query-form", "q"]);
        let mut config = FileConfig::default();
        apply_cli_overrides(&mut config, &cli);
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "query-form",
            "--server",
            "https://data.example.jp",
            "--endpoint",
            "/v2/query",
            "--timeout",
            "15",
            "--policy",
            "latest-wins",
            "--output",
            "html",
            "--quiet",
            "--no-color",
            "--log-file",
            "logs/query-form.log",
        ]);
        let mut config = FileConfig::default();

        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.http.base_url, "https://data.example.jp");
        assert_eq!(config.http.endpoint, "/v2/query");
        assert_eq!(config.http.timeout_seconds, Some(15));
        assert_eq!(config.form.policy, SubmitPolicy::LatestWins);
        assert_eq!(config.output.format, OutputFormat::Html);
        assert!(!config.output.show_progress);
        assert!(!config.output.color);
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("logs/query-form.log"))
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&SubmitOutcome::Rejected), ExitCode::from(2));
        assert_eq!(
            exit_code(&SubmitOutcome::Rendered(ResultView::error("boom"))),
            ExitCode::FAILURE
        );
        assert_eq!(
            exit_code(&SubmitOutcome::Rendered(ResultView::Success(QueryResult::new(
                serde_json::json!({})
            )))),
            ExitCode::SUCCESS
        );
    }
}
