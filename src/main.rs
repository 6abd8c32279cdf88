use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use unimozer_site::config::ToolsConfig;
use unimozer_site::downloads::{DownloadVariant, MAC_INSTALL_RESOURCES, silent_install_command};
use unimozer_site::platform::{ClientSignals, detect_platform_with_fallback};
use unimozer_site::ui::{DownloadTab, TabState, hero_cta};
use unimozer_site::{assets, links};

#[derive(Parser, Debug)]
#[command(name = "unimozer-site")]
#[command(about = "Build tooling and download logic for the Unimozer Next website")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./site-tools.json when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the download recommended for a set of browser signals
    Recommend {
        /// Raw User-Agent header
        #[arg(long, default_value = "")]
        user_agent: String,

        /// Client hint platform (navigator.userAgentData.platform)
        #[arg(long)]
        ua_platform: Option<String>,

        /// Client hint architecture (navigator.userAgentData.architecture)
        #[arg(long)]
        ua_arch: Option<String>,

        /// Legacy navigator.platform value
        #[arg(long)]
        platform: Option<String>,

        /// Optional URL fragment present when the page loads
        #[arg(long)]
        fragment: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every download variant with its label and URL
    Catalog {
        #[arg(long)]
        json: bool,
    },

    /// Build the runtime icon and depth map for the parallax logo
    Logo,

    /// Crop and transcode carousel screenshots
    Screenshots,

    /// Verify that every release download URL is reachable
    CheckLinks {
        /// Also check the third-party macOS install guides
        #[arg(long)]
        include_resources: bool,

        /// Per-request timeout in milliseconds (overrides config)
        #[arg(long)]
        timeout_ms: Option<u64>,

        #[arg(long)]
        json: bool,
    },
}

/// Set up logging: console always, plus a log file in debug builds.
fn setup_logging(verbose: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::prelude::*;

    let default_filter = if verbose {
        "debug"
    } else {
        "info,unimozer_site=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    // Console output goes to stderr so `--json` output stays clean on stdout
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_level(true);

    let (file_layer, guard) = match file_writer() {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

#[cfg(debug_assertions)]
fn file_writer() -> Option<(
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
)> {
    use std::fs::OpenOptions;
    use std::io::Write;

    let logs_dir = unimozer_site::paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        eprintln!("Failed to create logs directory");
        return None;
    }

    let log_file_path = logs_dir.join("unimozer-site.log");

    // Append session separator to existing log file
    if let Ok(mut file) = OpenOptions::new().append(true).open(&log_file_path) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Run Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }

    let file_appender = tracing_appender::rolling::never(&logs_dir, "unimozer-site.log");
    Some(tracing_appender::non_blocking(file_appender))
}

#[cfg(not(debug_assertions))]
fn file_writer() -> Option<(
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
)> {
    None
}

fn run_recommend(
    config: &ToolsConfig,
    signals: ClientSignals,
    fragment: Option<&str>,
    json: bool,
) -> Result<()> {
    let recommendation = detect_platform_with_fallback(&signals, config.mac_arch_fallback);
    let tab = TabState::initial(&recommendation, fragment);
    let cta = hero_cta(&recommendation);

    if json {
        let value = serde_json::json!({
            "recommendation": recommendation,
            "download": recommendation.recommended_download.map(|v| v.link()),
            "activeTab": tab.active,
            "heroCta": cta,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Platform:      {:?}", recommendation.platform);
    println!("Mac arch:      {:?}", recommendation.mac_arch);
    match recommendation.recommended_download {
        Some(variant) => {
            let link = variant.link();
            println!("Recommended:   {} ({})", link.label, variant.key());
            println!("               {}", link.url);
        }
        None => println!("Recommended:   none"),
    }
    println!("Active tab:    {}", tab.active.label());
    for candidate in DownloadTab::all() {
        if candidate.shows_badge(&recommendation) {
            println!("Badge on:      #{}", candidate.panel_id());
        }
    }
    println!("Hero button:   {} -> {}", cta.label, cta.href);
    Ok(())
}

fn run_catalog(json: bool) -> Result<()> {
    if json {
        let catalog: serde_json::Map<String, serde_json::Value> = DownloadVariant::all()
            .iter()
            .map(|v| (v.key().to_string(), serde_json::json!(v.link())))
            .collect();
        let value = serde_json::json!({
            "downloads": catalog,
            "macInstallResources": MAC_INSTALL_RESOURCES,
            "silentInstall": silent_install_command(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for variant in DownloadVariant::all() {
        let link = variant.link();
        println!("{:<16} {:<36} {}", variant.key(), link.label, link.url);
    }
    println!();
    println!("Silent install: {}", silent_install_command());
    Ok(())
}

fn run_check_links(
    config: &ToolsConfig,
    include_resources: bool,
    timeout_ms: Option<u64>,
    json: bool,
) -> Result<bool> {
    let mut targets = if config.links.targets.is_empty() {
        links::required_targets()
    } else {
        config.links.targets.clone()
    };
    if include_resources {
        targets.extend(links::resource_targets());
    }
    let timeout = Duration::from_millis(timeout_ms.unwrap_or(config.links.timeout_ms));

    info!("Checking {} required URLs...", targets.len());
    let report = links::check_all(&targets, timeout);

    for result in &report.results {
        if result.ok {
            info!("{}", result.report_line());
        } else {
            error!("{}", result.report_line());
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize link report")?
        );
    }

    if report.all_ok() {
        info!("All required links are reachable.");
        Ok(true)
    } else {
        error!(
            "Link check failed: {} URL(s) unreachable.",
            report.failure_count()
        );
        Ok(false)
    }
}

fn run(cli: Cli) -> Result<bool> {
    let config = ToolsConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Recommend {
            user_agent,
            ua_platform,
            ua_arch,
            platform,
            fragment,
            json,
        } => {
            let signals = ClientSignals {
                user_agent,
                ua_data_platform: ua_platform,
                ua_data_arch: ua_arch,
                navigator_platform: platform,
            };
            run_recommend(&config, signals, fragment.as_deref(), json)?;
            Ok(true)
        }
        Command::Catalog { json } => {
            run_catalog(json)?;
            Ok(true)
        }
        Command::Logo => {
            assets::process_logo(&config.logo).context("Logo asset processing failed")?;
            Ok(true)
        }
        Command::Screenshots => {
            assets::process_screenshots(&config.screenshots)
                .context("Screenshot processing failed")?;
            Ok(true)
        }
        Command::CheckLinks {
            include_resources,
            timeout_ms,
            json,
        } => run_check_links(&config, include_resources, timeout_ms, json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Keep the guard alive for the duration of the program
    let _log_guard = setup_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
