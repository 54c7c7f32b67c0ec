//! Request envelope and per-operation argument shapes.

use serde::{Deserialize, Serialize};

/// Gateway network selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    Testnet,
    Mainnet,
}

/// Gateway blockchain selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Blockchain {
    Kalp,
}

/// Fixed JSON wrapper sent with every gateway request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope<'a, A> {
    pub network: Network,
    pub blockchain: Blockchain,
    pub wallet_address: &'a str,
    pub args: A,
}

/// Arguments for `Claim`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClaimArgs<'a> {
    pub amount: u64,
    pub address: &'a str,
}

/// Arguments for `BalanceOf`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BalanceOfArgs<'a> {
    pub account: &'a str,
}

/// Arguments for `TransferFrom`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TransferFromArgs<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub value: u64,
}

/// Arguments for methods that take none. Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoArgs {}
