#![allow(non_snake_case)]

use std::fmt::Display;
use tracing::log;

pub mod config_handler;
pub mod models;
pub mod models_external;
pub mod rest_client;
pub mod points_service;
pub mod report_service;
pub mod season_service;

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::error!("{}: {}", msg, e);
                None
            }
        }
    }
}
