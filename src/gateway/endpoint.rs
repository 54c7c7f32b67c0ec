//! Contract methods and their gateway URLs.

use std::fmt;

/// Gateway request category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// Mutates on-chain state.
    Invoke,
    /// Reads on-chain state.
    Query,
}

impl CallKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallKind::Invoke => "invoke",
            CallKind::Query => "query",
        }
    }
}

/// Contract methods reachable through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractMethod {
    Claim,
    BalanceOf,
    TotalSupply,
    TransferFrom,
    GetTransactions,
}

impl ContractMethod {
    pub const ALL: [ContractMethod; 5] = [
        ContractMethod::Claim,
        ContractMethod::BalanceOf,
        ContractMethod::TotalSupply,
        ContractMethod::TransferFrom,
        ContractMethod::GetTransactions,
    ];

    /// Method name as exposed by the contract.
    pub fn name(&self) -> &'static str {
        match self {
            ContractMethod::Claim => "Claim",
            ContractMethod::BalanceOf => "BalanceOf",
            ContractMethod::TotalSupply => "TotalSupply",
            ContractMethod::TransferFrom => "TransferFrom",
            ContractMethod::GetTransactions => "GetTransactions",
        }
    }

    pub fn kind(&self) -> CallKind {
        match self {
            ContractMethod::Claim | ContractMethod::TransferFrom => CallKind::Invoke,
            ContractMethod::BalanceOf
            | ContractMethod::TotalSupply
            | ContractMethod::GetTransactions => CallKind::Query,
        }
    }

    /// Full endpoint URL: `{base}/{invoke|query}/{contract_id}/{Method}`.
    pub fn url(&self, base_url: &str, contract_id: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            base_url.trim_end_matches('/'),
            self.kind().as_str(),
            contract_id,
            self.name()
        )
    }
}

impl fmt::Display for ContractMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
