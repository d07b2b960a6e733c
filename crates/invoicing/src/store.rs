//! Single-owner invoice store.
//!
//! The store owns the current collection and is the only thing that replaces it.
//! Callers hold a `&mut InvoiceStore` (or whatever handle their UI framework hands
//! around) and go through `submit`; reads borrow the latest snapshot.
//!
//! ```text
//! Operation
//!   ↓
//! 1. Reduce against the current collection (pure; may reject)
//!   ↓
//! 2. Swap in the new collection, bump `version` if anything changed
//!   ↓
//! 3. Return the new snapshot (or the rejection, state untouched)
//! ```

use invoicedesk_core::{DomainResult, Reducer};

use crate::collection::InvoiceCollection;
use crate::invoice::{Invoice, InvoiceStatus};
use crate::operation::Operation;
use crate::query::StatusSummary;
use crate::seed::sample_invoices;

#[derive(Debug, Clone, Default)]
pub struct InvoiceStore {
    invoices: InvoiceCollection,
    version: u64,
}

impl InvoiceStore {
    /// Empty store at version 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with `invoices`, validated as if each were created in order.
    pub fn with_invoices(invoices: impl IntoIterator<Item = Invoice>) -> DomainResult<Self> {
        Ok(Self {
            invoices: InvoiceCollection::from_invoices(invoices)?,
            version: 0,
        })
    }

    /// Store holding the demo invoices.
    pub fn seeded() -> Self {
        Self::with_invoices(sample_invoices()).unwrap_or_else(|err| {
            tracing::error!(error = %err, "sample invoices rejected; starting empty");
            Self::new()
        })
    }

    /// Apply one operation.
    ///
    /// On success the new collection replaces the old one and is returned. On
    /// rejection nothing changes and the reason is returned for the caller to show.
    pub fn submit(&mut self, operation: Operation) -> DomainResult<&InvoiceCollection> {
        let next = match self.invoices.reduce(&operation) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(
                    operation = operation.kind(),
                    id = operation.target_id(),
                    error = %err,
                    "operation rejected"
                );
                return Err(err);
            }
        };

        if next == self.invoices {
            tracing::debug!(
                operation = operation.kind(),
                id = operation.target_id(),
                "operation left collection unchanged"
            );
        } else {
            self.invoices = next;
            self.version += 1;
            tracing::debug!(
                operation = operation.kind(),
                id = operation.target_id(),
                version = self.version,
                "operation applied"
            );
        }

        Ok(&self.invoices)
    }

    /// Current snapshot.
    pub fn invoices(&self) -> &InvoiceCollection {
        &self.invoices
    }

    pub fn get(&self, id: &str) -> Option<&Invoice> {
        self.invoices.get(id)
    }

    /// Number of operations that changed the collection since construction.
    ///
    /// Rejected and no-op operations leave it alone, so an unchanged version means
    /// nothing needs re-rendering.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn count_by_status(&self, status: InvoiceStatus) -> usize {
        self.invoices.count_by_status(status)
    }

    /// Paid/unpaid counts over the current snapshot.
    pub fn summary(&self) -> StatusSummary {
        StatusSummary::of(&self.invoices)
    }
}
