use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::DisplayRow;

/// What the result area of the page shows
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(tag = "status", content = "rows", rename_all = "snake_case")]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Success(Vec<DisplayRow>),
    Error,
}

/// Immutable snapshot of one page session. Every change goes through
/// [`SessionState::apply`], which returns a new snapshot.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SessionState {
    /// Text currently typed in the address field
    pub input: String,
    pub connected_account: Option<String>,
    pub status: QueryStatus,
    /// Bumped by every query start, reset and disconnect. Results carrying an
    /// older generation are dropped.
    pub generation: u64,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub enum Action {
    InputChanged(String),
    QueryStarted,
    WalletConnected(String),
    QuerySucceeded {
        generation: u64,
        rows: Vec<DisplayRow>,
        completed_at: DateTime<Utc>,
    },
    QueryFailed {
        generation: u64,
    },
    ResetForNewQuery,
    Disconnected,
}

impl SessionState {
    pub fn apply(&self, action: Action) -> SessionState {
        let mut next = self.clone();
        match action {
            Action::InputChanged(input) => {
                next.input = input;
            }
            Action::QueryStarted => {
                next.generation += 1;
                next.status = QueryStatus::Loading;
                next.completed_at = None;
            }
            Action::WalletConnected(account) => {
                next.connected_account = Some(account);
            }
            Action::QuerySucceeded {
                generation,
                rows,
                completed_at,
            } => {
                if generation != self.generation {
                    return next;
                }
                next.status = QueryStatus::Success(rows);
                next.completed_at = Some(completed_at);
            }
            Action::QueryFailed { generation } => {
                if generation != self.generation {
                    return next;
                }
                next.status = QueryStatus::Error;
                next.completed_at = None;
            }
            Action::ResetForNewQuery => {
                next.generation += 1;
                next.status = QueryStatus::Idle;
                next.completed_at = None;
            }
            Action::Disconnected => {
                next.generation += 1;
                next.connected_account = None;
                next.status = QueryStatus::Idle;
                next.completed_at = None;
            }
        }
        next
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, QueryStatus::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, QueryStatus::Error)
    }

    /// Gates the result grid and the "New Query" button
    pub fn has_result(&self) -> bool {
        matches!(self.status, QueryStatus::Success(_))
    }

    pub fn rows(&self) -> &[DisplayRow] {
        match &self.status {
            QueryStatus::Success(rows) => rows,
            _ => &[],
        }
    }
}
