use std::process::{Command, Output};

use assert_cmd::prelude::CommandCargoExt;
use nfl_points_rs::config_handler::Config;

pub struct PointsCli {
    config_path: String,
}

impl PointsCli {
    pub fn new(path: &str, config: &Config) -> PointsCli {
        let config_str = serde_json::to_string(config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        PointsCli { config_path }
    }

    pub fn with_raw_config(path: &str, raw: &str) -> PointsCli {
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), raw).unwrap();
        PointsCli { config_path }
    }

    /// Runs the binary to completion off the runtime threads, so the mock server keeps serving.
    pub async fn run(&self) -> Output {
        let config_path = self.config_path.clone();
        tokio::task::spawn_blocking(move || {
            Command::cargo_bin("nfl-points-rs")
                .unwrap()
                .env("CONFIG_PATH", config_path)
                .env("RUST_LOG", "info")
                .env_remove("BASE_URL")
                .env_remove("SEASON")
                .env_remove("CREDIT_MODE")
                .output()
                .expect("should run")
        })
        .await
        .expect("should join")
    }
}
