use std::fmt::Display;

use crate::models::TeamCode;
use crate::points_service::PointsTable;

pub const UNKNOWN_TEAM: &str = "Unknown Team";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPoints {
    pub team_code: TeamCode,
    pub name: String,
    pub total_points: i64,
}

impl Display for TeamPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Team Code: {}", self.team_code)?;
        writeln!(f, "Team Name: {}", self.name)?;
        write!(f, "Total Points Scored: {}", self.total_points)
    }
}

pub struct ReportService;

impl ReportService {
    pub fn report(table: &PointsTable) -> Vec<TeamPoints> {
        let mut result: Vec<TeamPoints> = table.points.iter()
            .map(|(code, points)| TeamPoints {
                team_code: *code,
                name: table.names.get(code).cloned().unwrap_or_else(|| UNKNOWN_TEAM.to_string()),
                total_points: *points,
            })
            .collect();
        result.sort_by_key(|e| e.team_code);
        result
    }

    /// One block per team followed by a blank line.
    pub fn render(entries: &[TeamPoints]) -> String {
        entries.iter()
            .map(|e| format!("{e}\n\n"))
            .collect()
    }
}
