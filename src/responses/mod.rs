//! Response objects returned for request entities

use crate::endpoints::PaymentSource;
use crate::requests::Gateway;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of an authorise, capture or retrieve request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<PaymentSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Gateway>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Ewallet as embedded in token responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ewallet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balances: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// Resolved ewallet endpoint token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EwalletToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ewallet: Option<Ewallet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_response_fields() {
        let response: TransactionResponse = serde_json::from_value(serde_json::json!({
            "amount": "10.00",
            "currency": "AUD",
            "id": "ORDER-1",
            "status": "completed",
            "approved": true,
            "gateway": {"service": "default", "line_of_business": "eWallet"},
            "unknown_field": "ignored"
        }))
        .unwrap();

        assert_eq!(response.amount.as_deref(), Some("10.00"));
        assert_eq!(response.approved, Some(true));
        assert_eq!(
            response.gateway.and_then(|g| g.line_of_business).as_deref(),
            Some("eWallet")
        );
    }

    #[test]
    fn test_ewallet_token_fields() {
        let token: EwalletToken = serde_json::from_value(serde_json::json!({
            "token": "EWT-42",
            "ewallet": {"currency": "AUD", "id": "K3H9", "pan": "K...H9", "reference": "w1"}
        }))
        .unwrap();

        let ewallet = token.ewallet.unwrap();
        assert_eq!(ewallet.currency.as_deref(), Some("AUD"));
        assert_eq!(ewallet.pan.as_deref(), Some("K...H9"));
    }
}
