//! Tracing setup.
//!
//! Console output always; unless disabled, the same events are also appended
//! to `{log_dir}/YYYYMM/YYYYMMDD/app.log`. The filter comes from `RUST_LOG`,
//! then `LOG_LEVEL`, then defaults to `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use chrono::{DateTime, TimeZone};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(log_dir: Option<&Path>) -> anyhow::Result<()> {
    let file_layer = match log_dir {
        Some(dir) => {
            let file = open_log_file(dir, &chrono::Local::now())?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(
            std::env::var("RUST_LOG").ok(),
            std::env::var("LOG_LEVEL").ok(),
        )))
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}

fn filter_directive(rust_log: Option<String>, log_level: Option<String>) -> String {
    rust_log
        .or(log_level)
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| "info".into())
}

pub fn log_file_path<Tz: TimeZone>(log_dir: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    log_dir
        .join(now.format("%Y%m").to_string())
        .join(now.format("%Y%m%d").to_string())
        .join("app.log")
}

fn open_log_file<Tz: TimeZone>(log_dir: &Path, now: &DateTime<Tz>) -> anyhow::Result<File>
where
    Tz::Offset: std::fmt::Display,
{
    let path = log_file_path(log_dir, now);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
