use serde::{Deserialize, Serialize};

/// Flat, serializable row describing one recorded transaction
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionReport {
    pub index: usize,

    #[serde(rename = "type")]
    pub typ: String,

    pub symbol: String,
    pub quantity: String,
    pub price: String,
    pub amount: String,
}
