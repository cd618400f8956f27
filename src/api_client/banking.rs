use serde::{Deserialize, Serialize};

use crate::api_client::{self, ApiError};

/// Supported (mocked) banking providers.
///
/// This is the seam where a real account-linking flow would plug in: the
/// rendering layer only ever deals in `BankProvider` values and
/// `sync_bank_account`, so a real integration replaces the mock endpoint
/// without touching any component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankProvider {
    Plaid,
    Stripe,
}

impl BankProvider {
    /// All providers offered by the connect panel, in display order.
    pub const ALL: [BankProvider; 2] = [BankProvider::Plaid, BankProvider::Stripe];

    /// Wire name used in the sync endpoint path.
    pub fn wire_name(&self) -> &'static str {
        match self {
            BankProvider::Plaid => "plaid",
            BankProvider::Stripe => "stripe",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BankProvider::Plaid => "Plaid",
            BankProvider::Stripe => "Stripe",
        }
    }
}

/// A single synced bank transaction. Ordering is whatever the backend sent;
/// the UI never re-sorts.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct BankTransaction {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
}

/// Connected-account snapshot held inside a report after a provider sync.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct BankingData {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub transactions: Vec<BankTransaction>,
    #[serde(default)]
    pub last_sync: Option<String>,
}

/// Envelope returned by the sync endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SyncResponse {
    #[serde(default)]
    pub status: String,
    pub data: BankingData,
}

/// Sync a (mocked) bank account into the given report.
pub async fn sync_bank_account(
    provider: BankProvider,
    report_id: i64,
) -> Result<BankingData, ApiError> {
    log::debug!(
        "Syncing bank account via {} for report {}",
        provider.wire_name(),
        report_id
    );

    let endpoint = format!(
        "/banking/sync/{}?report_id={}",
        provider.wire_name(),
        report_id
    );
    let result: Result<SyncResponse, ApiError> = api_client::post_empty(&endpoint).await;
    match result {
        Ok(response) => {
            log::info!(
                "Bank sync via {} succeeded: balance {}, {} transactions",
                provider.label(),
                response.data.balance,
                response.data.transactions.len()
            );
            Ok(response.data)
        }
        Err(e) => {
            log::error!("Bank sync via {} failed: {}", provider.label(), e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_response_envelope_decodes() {
        let body = serde_json::json!({
            "status": "success",
            "data": {
                "provider": "plaid",
                "account_id": "acc_12345",
                "balance": 45210.55,
                "transactions": [
                    { "date": "2026-08-25", "description": "Txn Ref: 4821 - Salary", "amount": 8200.0, "category": "Salary" },
                    { "date": "2026-08-22", "description": "Txn Ref: 1193 - Rent", "amount": -3500.0, "category": "Rent" }
                ],
                "last_sync": "2026-08-27T10:00:00"
            }
        });

        let response: SyncResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.data.provider, "plaid");
        assert_eq!(response.data.balance, 45210.55);
        assert_eq!(response.data.transactions.len(), 2);
        // Backend order is preserved as-is.
        assert_eq!(response.data.transactions[0].date, "2026-08-25");
        assert_eq!(response.data.transactions[1].amount, -3500.0);
    }

    #[test]
    fn minimal_banking_data_decodes() {
        let data: BankingData =
            serde_json::from_str(r#"{"provider": "stripe", "balance": 100}"#).unwrap();
        assert_eq!(data.provider, "stripe");
        assert_eq!(data.balance, 100.0);
        assert!(data.transactions.is_empty());
        assert!(data.account_id.is_none());
        assert!(data.last_sync.is_none());
    }

    #[test]
    fn provider_wire_names() {
        assert_eq!(BankProvider::Plaid.wire_name(), "plaid");
        assert_eq!(BankProvider::Stripe.wire_name(), "stripe");
        assert_eq!(BankProvider::ALL.len(), 2);
    }
}
