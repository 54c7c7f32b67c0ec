//! Dashboard session: the airdrop page's handlers over a gateway client.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::dashboard::state::{CallState, InFlight, OperationStatus};
use crate::gateway::{GatewayClient, GatewayResponse, GatewayResult, TransferRecord};

/// Displayed values plus one `CallState` per operation.
///
/// Failed calls leave the displayed balance and supply unchanged.
#[derive(Debug)]
pub struct Dashboard {
    client: GatewayClient,
    balance: AtomicU64,
    total_supply: AtomicU64,
    claim_state: CallState,
    balance_state: CallState,
    supply_state: CallState,
    transfer_state: CallState,
    transactions_state: CallState,
}

/// Serializable view of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub balance: u64,
    pub total_supply: u64,
    pub claim: OperationStatus,
    pub balance_of: OperationStatus,
    pub total_supply_query: OperationStatus,
    pub transfer: OperationStatus,
    pub transactions: OperationStatus,
}

impl Dashboard {
    pub fn new(client: GatewayClient) -> Self {
        Self {
            client,
            balance: AtomicU64::new(0),
            total_supply: AtomicU64::new(0),
            claim_state: CallState::new(),
            balance_state: CallState::new(),
            supply_state: CallState::new(),
            transfer_state: CallState::new(),
            transactions_state: CallState::new(),
        }
    }

    // Each operation marks its state loading when called, before the
    // returned future is first polled.

    /// Claim the airdrop for `address`, then refresh the total supply.
    ///
    /// A failed refresh is logged; the claim result is still returned.
    pub fn claim<'a>(
        &'a self,
        address: &'a str,
    ) -> impl Future<Output = GatewayResult<GatewayResponse>> + 'a {
        let in_flight = self.claim_state.begin();
        async move {
            let response = tracked(in_flight, "claim", self.client.claim(address)).await?;
            tracing::info!(address = %address, "Claim successful");

            if let Err(e) = self.total_supply().await {
                tracing::warn!(error = %e, "Total supply refresh after claim failed");
            }
            Ok(response)
        }
    }

    /// Look up and display the balance of `account`.
    pub fn balance_of<'a>(
        &'a self,
        account: &'a str,
    ) -> impl Future<Output = GatewayResult<u64>> + 'a {
        let in_flight = self.balance_state.begin();
        async move {
            let balance = tracked(in_flight, "balance_of", async {
                self.client.balance_of(account).await?.payload_u64()
            })
            .await?;
            self.balance.store(balance, Ordering::SeqCst);
            tracing::info!(account = %account, balance, "Balance updated");
            Ok(balance)
        }
    }

    /// Look up and display the total supply.
    pub fn total_supply(&self) -> impl Future<Output = GatewayResult<u64>> + '_ {
        let in_flight = self.supply_state.begin();
        async move {
            let supply = tracked(in_flight, "total_supply", async {
                self.client.total_supply().await?.payload_u64()
            })
            .await?;
            self.total_supply.store(supply, Ordering::SeqCst);
            tracing::info!(total_supply = supply, "Total supply updated");
            Ok(supply)
        }
    }

    pub fn transfer_from<'a>(
        &'a self,
        from: &'a str,
        to: &'a str,
        value: u64,
    ) -> impl Future<Output = GatewayResult<GatewayResponse>> + 'a {
        let in_flight = self.transfer_state.begin();
        async move {
            let response = tracked(
                in_flight,
                "transfer_from",
                self.client.transfer_from(from, to, value),
            )
            .await?;
            tracing::info!(from = %from, to = %to, value, "Transfer submitted");
            Ok(response)
        }
    }

    pub fn transactions(&self) -> impl Future<Output = GatewayResult<Vec<TransferRecord>>> + '_ {
        let in_flight = self.transactions_state.begin();
        tracked(in_flight, "transactions", async {
            self.client.get_transactions().await?.transfers()
        })
    }

    pub fn balance(&self) -> u64 {
        self.balance.load(Ordering::SeqCst)
    }

    pub fn displayed_total_supply(&self) -> u64 {
        self.total_supply.load(Ordering::SeqCst)
    }

    pub fn is_claiming(&self) -> bool {
        self.claim_state.is_loading()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            balance: self.balance(),
            total_supply: self.displayed_total_supply(),
            claim: self.claim_state.status(),
            balance_of: self.balance_state.status(),
            total_supply_query: self.supply_state.status(),
            transfer: self.transfer_state.status(),
            transactions: self.transactions_state.status(),
        }
    }

    pub fn client(&self) -> &GatewayClient {
        &self.client
    }
}

/// Await `call` while `in_flight` holds its state loading; record the
/// error on failure.
async fn tracked<T, F>(in_flight: InFlight<'_>, operation: &'static str, call: F) -> GatewayResult<T>
where
    F: Future<Output = GatewayResult<T>>,
{
    let result = call.await;
    if let Err(e) = &result {
        tracing::warn!(operation, error = %e, "Dashboard operation failed");
        in_flight.fail(e.to_string());
    }
    result
}
