use std::time::Instant;

use futures::future::join_all;
use tracing::log;

use crate::config_handler::Config;
use crate::points_service::{PointsService, PointsTable};
use crate::report_service::{ReportService, TeamPoints};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonRun {
    pub report: Vec<TeamPoints>,
    pub failed_teams: Vec<u32>,
}

pub struct SeasonService {
    points_service: PointsService,
    config: Config,
}

impl SeasonService {
    pub fn new(config: &Config) -> reqwest::Result<SeasonService> {
        Ok(SeasonService { points_service: PointsService::new(config)?, config: config.clone() })
    }

    pub async fn run(&self) -> SeasonRun {
        let before = Instant::now();
        let range = self.config.team_range;
        if range.is_empty() {
            log::warn!("[SEASON] Empty team range {range}, nothing to fetch");
        }

        let mut table = PointsTable::new();
        let failed_teams = if self.config.parallel {
            self.aggregate_parallel(&mut table).await
        } else {
            self.aggregate_sequential(&mut table).await
        };

        let report = ReportService::report(&table);
        log::info!(
            "[SEASON] {} {range} done, {} teams reported, {} failed, {:.2?}",
            self.config.season, report.len(), failed_teams.len(), before.elapsed()
        );
        SeasonRun { report, failed_teams }
    }

    async fn aggregate_sequential(&self, table: &mut PointsTable) -> Vec<u32> {
        let mut failed = vec![];
        for team_index in self.config.team_range.indices() {
            if self.points_service.aggregate_team(team_index, table).await.is_none() {
                failed.push(team_index);
            }
        }
        failed
    }

    /// Fetches every team at once, then folds in index order so the result matches a sequential run.
    async fn aggregate_parallel(&self, table: &mut PointsTable) -> Vec<u32> {
        let fetches = self.config.team_range.indices()
            .map(|team_index| async move { (team_index, self.points_service.fetch_team(team_index).await) });
        let results = join_all(fetches).await;

        let mut failed = vec![];
        for (team_index, games) in results {
            match games {
                Some(games) => {
                    self.points_service.fold_team(team_index, &games, table);
                },
                None => failed.push(team_index),
            }
        }
        failed
    }
}
