//! Run configuration, sourced from the environment once at startup.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

pub const DEFAULT_TARGET_URL: &str = "https://biletinial.com/tr-tr/tiyatro/profesyonel-dt";
pub const DEFAULT_VENUE_URL: &str = "https://biletinial.com/tr-tr/mekan/istanbul-devlet-tiyatrosu";
const DEFAULT_CUTOFF_DATE: &str = "2025-11-14";
const DEFAULT_ALLOWED_MONTHS: &str = "Kasım,Aralık";
const DEFAULT_SMTP_PORT: &str = "587";
const DEFAULT_STATE_PATH: &str = "state.json";

/// Immutable snapshot of everything a run needs. Built once in `main` and
/// passed down; components never read the environment themselves.
#[derive(Debug, Clone)]
pub struct Config {
    pub target_url: String,
    pub venue_url: String,
    pub cutoff: NaiveDate,
    pub allowed_months: Vec<String>,
    pub state_path: PathBuf,
    pub smtp: Option<Smtp>,
    pub debug: bool,
}

/// SMTP submission settings. Present only when host, user and password are
/// all configured; from/to fall back to the user address.
#[derive(Debug, Clone)]
pub struct Smtp {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub to: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let cutoff_raw = var_or("CUTOFF_DATE", DEFAULT_CUTOFF_DATE);
        let cutoff: NaiveDate = cutoff_raw
            .parse()
            .with_context(|| format!("invalid CUTOFF_DATE {:?}, expected YYYY-MM-DD", cutoff_raw))?;

        Ok(Config {
            target_url: var_or("TARGET_URL", DEFAULT_TARGET_URL),
            venue_url: var_or("VENUE_URL", DEFAULT_VENUE_URL),
            cutoff,
            allowed_months: parse_allowed_months(&var_or("ALLOWED_MONTHS", DEFAULT_ALLOWED_MONTHS)),
            state_path: PathBuf::from(var_or("STATE_PATH", DEFAULT_STATE_PATH)),
            smtp: smtp_from_env()?,
            debug: var_or("DEBUG", "0") == "1",
        })
    }
}

/// Split the comma-separated month whitelist, dropping blank entries. An
/// empty result disables the filter.
pub fn parse_allowed_months(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn smtp_from_env() -> Result<Option<Smtp>> {
    let (Ok(host), Ok(user), Ok(pass)) = (
        env::var("SMTP_HOST"),
        env::var("SMTP_USER"),
        env::var("SMTP_PASS"),
    ) else {
        return Ok(None);
    };
    let port_raw = var_or("SMTP_PORT", DEFAULT_SMTP_PORT);
    let port = port_raw
        .parse()
        .with_context(|| format!("invalid SMTP_PORT {:?}", port_raw))?;
    let from = env::var("FROM_EMAIL").unwrap_or_else(|_| user.clone());
    let to = env::var("TO_EMAIL").unwrap_or_else(|_| user.clone());

    Ok(Some(Smtp {
        host,
        port,
        user,
        pass,
        from,
        to,
    }))
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

// ── Tests ──
