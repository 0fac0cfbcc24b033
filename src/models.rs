use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

pub type TeamCode = i32;

/// Decides which side of a matchup gets credited for a team fetch.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CreditMode {
    /// Always credit the visiting side's code, whatever index was requested.
    #[default]
    Visiting,
    /// Credit the side whose team code equals the requested team index.
    Requested,
}

impl FromStr for CreditMode {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visiting" => Ok(CreditMode::Visiting),
            "Visiting" => Ok(CreditMode::Visiting),
            "requested" => Ok(CreditMode::Requested),
            "Requested" => Ok(CreditMode::Requested),
            _ => Err(ParseStringError)
        }
    }
}

impl Display for CreditMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStringError;

/// Upstream sends numbers as strings now and then, and nulls where it has no value.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StringOrNum {
    Number(i64),
    Float(f64),
    String(String),
}

impl StringOrNum {
    pub fn to_num(&self) -> i32 {
        match self {
            StringOrNum::Number(n) => i32::try_from(*n).unwrap_or(0),
            StringOrNum::Float(f) => *f as i32,
            StringOrNum::String(str) => str.trim().parse::<i32>().unwrap_or(0),
        }
    }

    pub fn to_str(&self) -> String {
        match self {
            StringOrNum::Number(n) => n.to_string(),
            StringOrNum::Float(f) => f.to_string(),
            StringOrNum::String(str) => str.to_owned(),
        }
    }
}

pub fn int_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Ok(Option::<StringOrNum>::deserialize(deserializer)?
        .map(|e| e.to_num())
        .unwrap_or(0))
}

pub fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<StringOrNum>::deserialize(deserializer)?
        .map(|e| e.to_str())
        .unwrap_or_default())
}

pub fn bool_or_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Inclusive range of team indices to request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamRange(pub u32, pub u32);

impl TeamRange {
    pub fn indices(&self) -> std::ops::RangeInclusive<u32> {
        self.0..=self.1
    }

    pub fn is_empty(&self) -> bool {
        self.0 > self.1
    }
}

impl Default for TeamRange {
    fn default() -> Self {
        TeamRange(1, 32)
    }
}

impl Display for TeamRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.0, self.1)
    }
}
