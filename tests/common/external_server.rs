use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{Router, extract::{Query, State}, http::{HeaderMap, header::USER_AGENT}, response::IntoResponse, routing::get};
use nfl_points_rs::models::TeamCode;
use nfl_points_rs::models_external::matchup::{GameRecord, GameSideStats, SeasonRsp};
use reqwest::StatusCode;
use serde::Deserialize;
use tokio::{sync::RwLock, task::JoinHandle};

pub const SEARCH_PATH: &str = "/search/nfl/searchHandler";

#[derive(Deserialize, Debug, Clone)]
pub struct SearchQuery {
    pub fileType: String,
    pub statType: String,
    pub season: String,
    pub teamName: u32,
}

#[derive(Default)]
pub struct AppState {
    pub responses: HashMap<u32, (StatusCode, String)>,
    pub requests: Vec<SearchQuery>,
    pub user_agents: Vec<String>,
}

pub struct ExternalServer {
    addr: Option<SocketAddr>,
    handles: Vec<JoinHandle<()>>,
    pub api_state: Arc<RwLock<AppState>>,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new() -> ExternalServer {
        ExternalServer { addr: None, handles: vec![], api_state: Arc::new(RwLock::new(AppState::default())) }
    }

    /// Binds an ephemeral port, must be called inside a tokio runtime.
    pub fn start(&mut self) {
        let app = Router::new()
            .route(SEARCH_PATH, get(ExternalServer::get_search))
            .with_state(self.api_state.clone());

        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(app.into_make_service());
        self.addr = Some(server.local_addr());
        self.handles.push(tokio::spawn(async move {
            server.await.unwrap();
        }));
    }

    pub fn get_url(&self) -> String {
        let addr = self.addr.expect("server to be started");
        format!("http://{addr}{SEARCH_PATH}")
    }

    pub async fn set_response(&self, team_index: u32, status: StatusCode, body: &str) {
        self.api_state.write().await.responses.insert(team_index, (status, body.to_string()));
    }

    pub async fn set_games(&self, team_index: u32, games: Vec<GameRecord>) {
        let body = serde_json::to_string(&SeasonRsp { matchUpStats: games }).expect("should encode to json");
        self.set_response(team_index, StatusCode::OK, &body).await;
    }

    pub async fn set_bare_games(&self, team_index: u32, games: Vec<GameRecord>) {
        let body = serde_json::to_string(&games).expect("should encode to json");
        self.set_response(team_index, StatusCode::OK, &body).await;
    }

    pub async fn get_requests(&self) -> Vec<SearchQuery> {
        self.api_state.read().await.requests.clone()
    }

    pub async fn get_user_agents(&self) -> Vec<String> {
        self.api_state.read().await.user_agents.clone()
    }

    async fn get_search(headers: HeaderMap, query: Query<SearchQuery>, State(state): State<Arc<RwLock<AppState>>>) -> impl IntoResponse {
        let mut state = state.write().await;
        state.requests.push(query.0.clone());
        let user_agent = headers.get(USER_AGENT)
            .and_then(|e| e.to_str().ok())
            .unwrap_or_default()
            .to_string();
        state.user_agents.push(user_agent);
        match state.responses.get(&query.teamName) {
            Some((status, body)) => (*status, body.clone()),
            None => (StatusCode::NOT_FOUND, format!("no team {}", query.teamName)),
        }
    }
}

pub fn game(vis: TeamCode, vis_score: i32, home: TeamCode, home_score: i32) -> GameRecord {
    GameRecord {
        neutral: false,
        visTeamName: format!("Team {vis}"),
        visStats: GameSideStats { teamCode: vis, score: vis_score, gameDate: "2020-09-13".to_string(), ..Default::default() },
        homeTeamName: format!("Team {home}"),
        homeStats: GameSideStats { teamCode: home, score: home_score, gameDate: "2020-09-13".to_string(), ..Default::default() },
        isFinal: true,
        date: "2020-09-13".to_string(),
    }
}
