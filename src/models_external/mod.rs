pub mod matchup;
