use chrono::Utc;
use futures::future::try_join_all;
use log::{debug, error, info, warn};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::QueryError;
use crate::models::{Action, DisplayRow, SessionState, TokenMetadata};
use crate::providers::{TokenDataProvider, WalletProvider};
use crate::utils::contract_key;

/// Drives one page session: address or wallet queries, reset and disconnect.
///
/// State changes are applied as [`Action`]s on an immutable [`SessionState`];
/// the lock is only held while swapping snapshots, never across remote calls.
pub struct BalanceQueryFlow {
    data: Arc<dyn TokenDataProvider>,
    wallet: Arc<dyn WalletProvider>,
    surface_wallet_errors: bool,
    state: RwLock<SessionState>,
}

impl BalanceQueryFlow {
    pub fn new(
        data: Arc<dyn TokenDataProvider>,
        wallet: Arc<dyn WalletProvider>,
        surface_wallet_errors: bool,
    ) -> Self {
        Self {
            data,
            wallet,
            surface_wallet_errors,
            state: RwLock::new(SessionState::default()),
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    async fn dispatch(&self, action: Action) -> SessionState {
        let mut state = self.state.write().await;
        *state = state.apply(action);
        state.clone()
    }

    /// Record the text typed in the address field
    pub async fn set_input(&self, input: String) -> SessionState {
        self.dispatch(Action::InputChanged(input)).await
    }

    /// Query balances for `address`. Failures end in the generic error state;
    /// details only go to the log.
    pub async fn query_by_address(&self, address: &str) -> SessionState {
        let generation = self.dispatch(Action::QueryStarted).await.generation;
        self.run_query(generation, address).await
    }

    /// Connect the wallet and query its first account.
    ///
    /// A wallet failure is logged and leaves the session untouched, unless
    /// the flow was built to surface wallet errors, in which case it ends in
    /// the same error state as a failed manual query.
    pub async fn query_by_connected_wallet(&self) -> SessionState {
        let generation = self.snapshot().await.generation;
        let outcome = self.connect_wallet().await;

        let mut state = self.state.write().await;
        if state.generation != generation {
            warn!(
                "Wallet answer for #{} superseded by #{}, dropping it",
                generation, state.generation
            );
            return state.clone();
        }

        match outcome {
            Ok(account) => {
                *state = state
                    .apply(Action::WalletConnected(account.clone()))
                    .apply(Action::QueryStarted);
                let generation = state.generation;
                drop(state);

                info!("Wallet connected: {}", account);
                self.run_query(generation, &account).await
            }
            Err(e) => {
                error!("Wallet connection failed: {}", e);
                if self.surface_wallet_errors {
                    let started = state.apply(Action::QueryStarted);
                    *state = started.apply(Action::QueryFailed {
                        generation: started.generation,
                    });
                }
                state.clone()
            }
        }
    }

    /// Forget the connected account and clear results. The wallet's own
    /// authorization is left alone.
    pub async fn disconnect(&self) -> SessionState {
        info!("Disconnecting wallet account");
        self.dispatch(Action::Disconnected).await
    }

    /// Clear results so a new query can start; typed input is kept.
    pub async fn reset_for_new_query(&self) -> SessionState {
        self.dispatch(Action::ResetForNewQuery).await
    }

    async fn connect_wallet(&self) -> Result<String, QueryError> {
        let accounts = self.wallet.request_accounts().await?;
        if accounts.len() > 1 {
            debug!(
                "Wallet returned {} accounts, using the first",
                accounts.len()
            );
        }
        accounts.into_iter().next().ok_or(QueryError::NoAccounts)
    }

    async fn run_query(&self, generation: u64, address: &str) -> SessionState {
        match fetch_rows(self.data.as_ref(), address).await {
            Ok(rows) => {
                info!(
                    "Query #{} for {} returned {} tokens",
                    generation,
                    address,
                    rows.len()
                );
                let state = self
                    .dispatch(Action::QuerySucceeded {
                        generation,
                        rows,
                        completed_at: Utc::now(),
                    })
                    .await;
                if state.generation != generation {
                    warn!("Query #{} superseded by #{}", generation, state.generation);
                }
                state
            }
            Err(e) => {
                error!("Query #{} for {} failed: {}", generation, address, e);
                self.dispatch(Action::QueryFailed { generation }).await
            }
        }
    }
}

/// Fetch balances for `address` and join them with metadata.
///
/// One metadata lookup per distinct contract, all in flight at once; the
/// rows are built only after every lookup succeeded and keep the order of
/// the balance list.
pub async fn fetch_rows(
    provider: &dyn TokenDataProvider,
    address: &str,
) -> Result<Vec<DisplayRow>, QueryError> {
    let balances = provider.get_token_balances(address).await?;

    let mut seen = HashSet::new();
    let contracts: Vec<&str> = balances
        .token_balances
        .iter()
        .map(|record| record.contract_address.as_str())
        .filter(|contract| seen.insert(contract_key(contract)))
        .collect();

    debug!(
        "{} holds {} contracts, fetching metadata",
        address,
        contracts.len()
    );

    let lookups = contracts.iter().map(|contract| async move {
        let metadata = provider.get_token_metadata(contract).await?;
        Ok::<_, QueryError>((contract_key(contract), metadata))
    });
    let metadata: HashMap<String, TokenMetadata> =
        try_join_all(lookups).await?.into_iter().collect();

    balances
        .token_balances
        .iter()
        .map(|record| {
            let key = contract_key(&record.contract_address);
            let token = metadata.get(&key).ok_or_else(|| QueryError::Metadata {
                contract: record.contract_address.clone(),
                reason: "no metadata fetched".to_string(),
            })?;
            DisplayRow::from_parts(record, token)
        })
        .collect()
}
