use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::log;

use crate::models::{CreditMode, TeamRange};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default="default_base_url")]
    pub base_url: String,

    #[serde(default="default_season")]
    pub season: String,

    #[serde(default)]
    pub team_range: TeamRange,

    #[serde(default="default_file_type")]
    pub file_type: String,
    #[serde(default="default_stat_type")]
    pub stat_type: String,

    #[serde(default="default_request_timeout_s")]
    pub request_timeout_s: u64,

    #[serde(default="default_false")]
    pub parallel: bool,

    #[serde(default)]
    pub credit_mode: CreditMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            season: default_season(),
            team_range: TeamRange::default(),
            file_type: default_file_type(),
            stat_type: default_stat_type(),
            request_timeout_s: default_request_timeout_s(),
            parallel: default_false(),
            credit_mode: CreditMode::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://sports.snoozle.net/search/nfl/searchHandler".to_string()
}

fn default_season() -> String {
    "2020".to_string()
}

fn default_file_type() -> String {
    "inline".to_string()
}

fn default_stat_type() -> String {
    "teamStats".to_string()
}

fn default_request_timeout_s() -> u64 {
    10
}

fn default_false() -> bool {
    false
}

impl Config {
    pub fn get_team_url(&self, team_index: u32) -> String {
        format!("{}?fileType={}&statType={}&season={}&teamName={team_index}", self.base_url, self.file_type, self.stat_type, self.season)
    }
}

/// Reads the config at `CONFIG_PATH` (default `./config.json`).
///
/// A missing file means defaults; a file that exists but doesn't parse is an error.
pub fn get_config() -> anyhow::Result<Config> {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./config.json".to_string());
    let mut result = read_config(&path)?;
    apply_overrides(&mut result, |key| std::env::var(key).ok());
    log::info!("[CONFIG] {:?}", result);
    Ok(result)
}

/// Applies `BASE_URL`, `SEASON` and `CREDIT_MODE` on top of the file values.
pub fn apply_overrides<F: Fn(&str) -> Option<String>>(config: &mut Config, lookup: F) {
    if let Some(base_url) = lookup("BASE_URL") {
        config.base_url = base_url;
        log::info!("[CONFIG] BASE_URL {}", config.base_url);
    }
    if let Some(season) = lookup("SEASON") {
        config.season = season;
        log::info!("[CONFIG] SEASON {}", config.season);
    }
    if let Some(credit_mode) = lookup("CREDIT_MODE") {
        match credit_mode.parse::<CreditMode>() {
            Ok(mode) => {
                config.credit_mode = mode;
                log::info!("[CONFIG] CREDIT_MODE {}", config.credit_mode);
            },
            Err(_) => log::warn!("[CONFIG] Unknown CREDIT_MODE {credit_mode}, keeping {}", config.credit_mode),
        }
    }
}

pub fn read_config(path: &str) -> anyhow::Result<Config> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("[CONFIG] No config at {path}, using defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(e).with_context(|| format!("Unable to read config at {path}")),
    };
    serde_json::from_str(&data)
        .with_context(|| format!("Could not parse JSON at {path}!"))
}
