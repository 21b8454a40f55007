//! Tracing subscriber setup
//!
//! CLI mode logs to stderr. The TUI owns the terminal, so it logs to a daily
//! rolling file instead.

use anyhow::Result;
use std::io;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Filter directives for a verbosity count.
/// 0 = info, 1 = debug (hyper/reqwest internals kept at warn), 2+ = trace
pub fn filter_directives(verbose_level: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose_level {
        0 => "info",
        1 => "debug,hyper=warn,hyper_util=warn,reqwest=warn",
        _ => "trace",
    }
}

pub fn init_logging(verbose_level: u8, quiet: bool, target: LogTarget) -> Result<()> {
    let directives = filter_directives(verbose_level, quiet);
    // RUST_LOG wins unless the user asked for quiet
    let filter = if quiet {
        EnvFilter::new(directives)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
    };

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or(false);

    let registry = Registry::default().with(filter);

    match target {
        LogTarget::File(log_path) => {
            let log_dir = log_path
                .parent()
                .ok_or_else(|| anyhow::anyhow!("Log file path has no parent directory"))?;
            std::fs::create_dir_all(log_dir)?;

            let log_filename = log_path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| anyhow::anyhow!("Invalid log filename"))?;

            // Files will be named cinetui.log.2026-10-18 etc.
            let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, log_filename);

            if json {
                registry
                    .with(fmt::layer().json().with_writer(appender))
                    .try_init()?;
            } else {
                registry
                    .with(fmt::layer().with_ansi(false).with_writer(appender))
                    .try_init()?;
            }
        }
        LogTarget::Stderr => {
            if json {
                registry
                    .with(fmt::layer().json().with_writer(io::stderr))
                    .try_init()?;
            } else {
                registry
                    .with(fmt::layer().with_writer(io::stderr))
                    .try_init()?;
            }
        }
    }

    Ok(())
}
