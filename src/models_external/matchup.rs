use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{bool_or_false, int_or_zero, string_or_empty, TeamCode};

pub const MATCHUP_FIELD: &str = "matchUpStats";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GameSideStats {
    #[serde(deserialize_with = "string_or_empty")]
    pub statIdCode: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub gameCode: String,
    #[serde(deserialize_with = "int_or_zero")]
    pub teamCode: TeamCode,
    #[serde(deserialize_with = "string_or_empty")]
    pub gameDate: String,
    #[serde(deserialize_with = "int_or_zero")]
    pub rushYds: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub rushAtt: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub passYds: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub passAtt: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub passComp: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub penalties: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub penaltyYds: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub fumblesLost: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub interceptionsThrown: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub firstDowns: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub thirdDownAtt: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub thirdDownConver: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub fourthDownAtt: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub fourthDownConver: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub timePoss: i32,
    #[serde(deserialize_with = "int_or_zero")]
    pub score: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    #[serde(default, deserialize_with = "bool_or_false")]
    pub neutral: bool,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub visTeamName: String,
    pub visStats: GameSideStats,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub homeTeamName: String,
    pub homeStats: GameSideStats,
    #[serde(default, deserialize_with = "bool_or_false")]
    pub isFinal: bool,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date: String,
}

impl GameRecord {
    /// The side playing as `team_code`, with its display name.
    pub fn side_for(&self, team_code: TeamCode) -> Option<(&GameSideStats, &str)> {
        if self.visStats.teamCode == team_code {
            Some((&self.visStats, self.visTeamName.as_str()))
        } else if self.homeStats.teamCode == team_code {
            Some((&self.homeStats, self.homeTeamName.as_str()))
        } else {
            None
        }
    }
}

impl Display for GameRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} - {} {}", self.date, self.visTeamName, self.visStats.score, self.homeStats.score, self.homeTeamName)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonRsp {
    pub matchUpStats: Vec<GameRecord>,
}

#[derive(Debug)]
pub enum DecodeError {
    Syntax(serde_json::Error),
    Shape(String),
    Records(serde_json::Error),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Syntax(e) => write!(f, "Malformed JSON: {e}"),
            DecodeError::Shape(found) => write!(f, "Expected an array or an object with \"{MATCHUP_FIELD}\", found {found}"),
            DecodeError::Records(e) => write!(f, "Invalid game record: {e}"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decodes a season payload, either `{"matchUpStats": [...]}` or a bare `[...]`.
///
/// The wrapped form is tried first. Unknown keys are ignored, missing or null
/// counters decode as 0 and numeric strings are parsed.
pub fn decode(body: &str) -> Result<Vec<GameRecord>, DecodeError> {
    let value: Value = serde_json::from_str(body).map_err(DecodeError::Syntax)?;
    if value.get(MATCHUP_FIELD).is_some() {
        serde_json::from_value::<SeasonRsp>(value)
            .map(|e| e.matchUpStats)
            .map_err(DecodeError::Records)
    } else if value.is_array() {
        serde_json::from_value(value).map_err(DecodeError::Records)
    } else {
        Err(DecodeError::Shape(kind_of(&value).to_string()))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
