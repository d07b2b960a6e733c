use serde::{Deserialize, Serialize};

use crate::invoice::Invoice;

/// The closed set of mutations the store accepts.
///
/// Each variant carries exactly the payload it needs; `InvoiceCollection::reduce`
/// matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Operation {
    /// Append a new invoice. Rejected on an empty required field or a taken id.
    Create(Invoice),
    /// Replace the invoice with the same id, keeping its position.
    Update(Invoice),
    /// Remove by id. Absent ids are a no-op.
    Delete(String),
    /// Flip `Paid`/`Unpaid` by id. Absent ids are a no-op.
    ToggleStatus(String),
}

impl Operation {
    pub fn delete(id: impl Into<String>) -> Self {
        Operation::Delete(id.into())
    }

    pub fn toggle_status(id: impl Into<String>) -> Self {
        Operation::ToggleStatus(id.into())
    }

    /// Stable name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Create(_) => "invoice.create",
            Operation::Update(_) => "invoice.update",
            Operation::Delete(_) => "invoice.delete",
            Operation::ToggleStatus(_) => "invoice.toggle_status",
        }
    }

    /// Id of the invoice the operation targets.
    pub fn target_id(&self) -> &str {
        match self {
            Operation::Create(invoice) | Operation::Update(invoice) => &invoice.id,
            Operation::Delete(id) | Operation::ToggleStatus(id) => id,
        }
    }
}
