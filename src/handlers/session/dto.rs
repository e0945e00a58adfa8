use serde::{Deserialize, Serialize};

use crate::models::{DisplayRow, QueryStatus, SessionState};
use crate::utils::shorten_address;

/// The only failure text a user ever sees
pub const QUERY_ERROR_MESSAGE: &str =
    "Error: Unable to fetch token balances. Please check the address and try again.";

/// Response model for session API endpoints
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub input: String,
    pub connected_account: Option<String>,
    pub connected_badge: Option<String>,
    pub status: &'static str,
    pub has_result: bool,
    pub is_loading: bool,
    pub error: Option<&'static str>,
    pub rows: Vec<DisplayRow>,
    pub generation: u64,
    pub completed_at: Option<i64>,
}

impl From<SessionState> for SessionResponse {
    fn from(state: SessionState) -> Self {
        let has_result = state.has_result();
        let is_loading = state.is_loading();
        let connected_badge = state.connected_account.as_deref().map(shorten_address);

        let (status, error, rows) = match state.status {
            QueryStatus::Idle => ("idle", None, Vec::new()),
            QueryStatus::Loading => ("loading", None, Vec::new()),
            QueryStatus::Success(rows) => ("success", None, rows),
            QueryStatus::Error => ("error", Some(QUERY_ERROR_MESSAGE), Vec::new()),
        };

        SessionResponse {
            input: state.input,
            connected_account: state.connected_account,
            connected_badge,
            status,
            has_result,
            is_loading,
            error,
            rows,
            generation: state.generation,
            completed_at: state.completed_at.map(|at| at.timestamp()),
        }
    }
}

/// Request model for updating the typed address
#[derive(Debug, Deserialize)]
pub struct SetInputRequest {
    pub address: String,
}

/// Request model for a manual query; without an address the typed input is used
#[derive(Debug, Default, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub address: Option<String>,
}
