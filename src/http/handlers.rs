//! Dashboard API handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::dashboard::DashboardSnapshot;
use crate::gateway::TransferRecord;
use crate::http::response::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Deserialize)]
pub struct ClaimRequest {
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub from: String,
    pub to: String,
    pub value: u64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceResponse {
    pub account: String,
    pub balance: u64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplyResponse {
    pub total_supply: u64,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn get_state(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(state.dashboard.snapshot())
}

pub async fn claim(
    State(state): State<AppState>,
    payload: Result<Json<ClaimRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload?;
    let address = non_empty("address", &request.address)?;
    let response = state.dashboard.claim(address).await?;
    Ok(Json(response.into_inner()))
}

pub async fn balance(
    State(state): State<AppState>,
    account: Result<Path<String>, PathRejection>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let Path(account) = account?;
    let account = non_empty("account", &account)?;
    let balance = state.dashboard.balance_of(account).await?;
    Ok(Json(BalanceResponse {
        account: account.to_string(),
        balance,
    }))
}

pub async fn supply(State(state): State<AppState>) -> Result<Json<SupplyResponse>, ApiError> {
    let total_supply = state.dashboard.total_supply().await?;
    Ok(Json(SupplyResponse { total_supply }))
}

pub async fn transfer(
    State(state): State<AppState>,
    payload: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload?;
    let from = non_empty("from", &request.from)?;
    let to = non_empty("to", &request.to)?;
    if from == to {
        return Err(ApiError::BadRequest(
            "cannot transfer to the same account".to_string(),
        ));
    }

    let response = state.dashboard.transfer_from(from, to, request.value).await?;
    Ok(Json(response.into_inner()))
}

pub async fn transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransferRecord>>, ApiError> {
    Ok(Json(state.dashboard.transactions().await?))
}

/// Reject blank input. Accepted values are forwarded unchanged.
fn non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_keeps_value_verbatim() {
        assert_eq!(non_empty("address", "  alice ").unwrap(), "  alice ");
        assert!(non_empty("address", "   ").is_err());
        assert!(non_empty("address", "").is_err());
    }
}
