use std::collections::HashMap;
use std::time::Duration;

use tracing::log;

use crate::config_handler::Config;
use crate::models::{CreditMode, TeamCode};
use crate::models_external::matchup::{self, GameRecord};
use crate::rest_client::RestClient;
use crate::LogResult;

/// Running totals for one run. Codes come from the payload, not the request index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsTable {
    pub points: HashMap<TeamCode, i64>,
    pub names: HashMap<TeamCode, String>,
}

impl PointsTable {
    pub fn new() -> PointsTable {
        PointsTable::default()
    }

    fn credit(&mut self, team_code: TeamCode, score: i32, name: &str) {
        *self.points.entry(team_code).or_insert(0) += i64::from(score);
        self.names
            .entry(team_code)
            .or_insert_with(|| name.to_string());
    }

    /// Folds the games returned for `team_index` into the table, returns the number credited.
    pub fn add_games(&mut self, team_index: u32, games: &[GameRecord], mode: CreditMode) -> usize {
        let mut credited = 0;
        for g in games {
            let reference = match mode {
                CreditMode::Visiting => g.visStats.teamCode,
                CreditMode::Requested => match TeamCode::try_from(team_index) {
                    Ok(code) => code,
                    Err(_) => continue,
                },
            };
            match g.side_for(reference) {
                Some((stats, name)) => {
                    self.credit(reference, stats.score, name);
                    credited += 1;
                },
                None => {
                    log::debug!("[POINTS] Team {team_index} not in game {g}");
                }
            }
        }
        credited
    }
}

pub struct PointsService {
    client: RestClient,
    config: Config,
}

impl PointsService {
    pub fn new(config: &Config) -> reqwest::Result<PointsService> {
        Ok(PointsService {
            client: RestClient::new(Duration::from_secs(config.request_timeout_s))?,
            config: config.clone(),
        })
    }

    /// Fetches and decodes one team's season. Failures are logged and give `None`.
    pub async fn fetch_team(&self, team_index: u32) -> Option<Vec<GameRecord>> {
        let url = self.config.get_team_url(team_index);
        let body = self.client.fetch(&url).await
            .ok_log(&format!("[REST] Fetch failed for team {team_index}"))?;
        matchup::decode(&body)
            .ok_log(&format!("[DECODE] Parse failed for team {team_index}"))
    }

    /// Adds one team's season to `table`. `None` if the team contributed nothing because of an error.
    pub async fn aggregate_team(&self, team_index: u32, table: &mut PointsTable) -> Option<usize> {
        let games = self.fetch_team(team_index).await?;
        Some(self.fold_team(team_index, &games, table))
    }

    pub fn fold_team(&self, team_index: u32, games: &[GameRecord], table: &mut PointsTable) -> usize {
        if games.is_empty() {
            log::info!("[POINTS] No games for team {team_index}");
            return 0;
        }
        let credited = table.add_games(team_index, games, self.config.credit_mode);
        log::info!("[POINTS] Team {team_index} credited {credited}/{} games", games.len());
        credited
    }
}
