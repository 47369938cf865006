//! Payment and wallet models (read-only query surface)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wallet balance for a farmer or FPO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletBalance {
    pub owner_id: Uuid,
    pub available: Decimal,
    /// Amount locked against in-progress trades
    pub on_hold: Decimal,
    pub currency: String,
    pub as_of: DateTime<Utc>,
}

/// Direction of a payment relative to the wallet owner
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentDirection {
    Credit,
    Debit,
}

/// Status of a payment transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

/// A single wallet transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentTransaction {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub amount: Decimal,
    pub direction: PaymentDirection,
    pub status: PaymentStatus,
    /// Trade lot or external payment reference
    pub reference: Option<String>,
    pub counterparty: Option<String>,
    pub created_at: DateTime<Utc>,
}
