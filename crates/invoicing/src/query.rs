//! Derived read-side views. Nothing here is stored; every value is recomputed from the
//! current collection.

use serde::{Deserialize, Serialize};

use crate::collection::InvoiceCollection;
use crate::invoice::{Invoice, InvoiceStatus};

/// Number of invoices in `collection` whose status equals `status`.
pub fn count_by_status(collection: &InvoiceCollection, status: InvoiceStatus) -> usize {
    collection.count_by_status(status)
}

/// `quantity × price` for one invoice.
pub fn total_amount(invoice: &Invoice) -> i128 {
    invoice.total_amount()
}

/// Paid/unpaid counts for the summary line.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub paid_count: usize,
    pub unpaid_count: usize,
}

impl StatusSummary {
    /// Single pass over the collection.
    pub fn of(collection: &InvoiceCollection) -> Self {
        collection
            .iter()
            .fold(Self::default(), |mut summary, invoice| {
                if invoice.status.is_paid() {
                    summary.paid_count += 1;
                } else {
                    summary.unpaid_count += 1;
                }
                summary
            })
    }

    pub fn count(&self, status: InvoiceStatus) -> usize {
        match status {
            InvoiceStatus::Paid => self.paid_count,
            InvoiceStatus::Unpaid => self.unpaid_count,
        }
    }

    pub fn total(&self) -> usize {
        self.paid_count + self.unpaid_count
    }
}
